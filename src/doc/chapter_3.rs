/*!
# Commands

Commands are typed without a line number and act on the whole program.
They may be typed in any case. Any other text without a line number
is refused with `ILLEGAL DIRECT`.
*/

pub mod RUN {
    /*!
    ## `RUN` Runs the program from its lowest line.
    All variables are erased before the first line runs.
    Stop a running program with CTRL-C.
    */
}

pub mod DEBUG {
    /*!
    ## `DEBUG` Runs the program one line at a time.
    Each line is shown before it runs followed by where execution
    goes next. Press ENTER to continue or type `Q` to stop.
    ```text
    10 A = 1
    20 GOTO 10
    DEBUG
    10 LET A = 1
      -> NEXT
      A = 1
    [ENTER] step, Q stop:
    20 GOTO 10
      -> GOTO 10
    [ENTER] step, Q stop: q
    BREAK IN 20
    ```
    */
}

pub mod LIST {
    /*!
    ## `LIST [<from>][-[<to>]]` Shows program lines.
    ```text
    LIST
    LIST 100
    LIST 100-
    LIST -100
    LIST 100-200
    ```
    */
}

pub mod CLEAR {
    /*!
    ## `CLEAR` Erases the program and all variables.
    */
}

pub mod SAVE {
    /*!
    ## `SAVE "<filename>"` Writes the program to a text file.
    Each program line becomes one line of the file.
    */
}

pub mod OLD {
    /*!
    ## `OLD "<filename>"` Replaces the program with one from a file.
    `LOAD` is accepted as well. Blank lines in the file are skipped.
    A line without a line number is refused with
    `DIRECT STATEMENT IN FILE`. On any error the current program
    is kept.
    */
}

pub mod HELP {
    /*!
    ## `HELP` Shows a summary of commands and statements.
    */
}

pub mod QUIT {
    /*!
    ## `QUIT` Leaves the interpreter. CTRL-D does the same.
    */
}
