/*!
# Introductory Tutorial for Mini BASIC

Begin by opening a terminal and running `minibasic`. There is no banner;
the interpreter simply waits for you to type. Type CTRL-D or `QUIT` to exit.

A program is a list of numbered lines. Each line holds one statement.
For this tutorial, I'll mark lines that you type with a "`>`".

<pre><code>&nbsp;> 10 print "Hello World"
</code></pre>

Nothing happens. The line is saved to be run later. Lines may be typed
in any order; they always run from the lowest number to the highest.

<pre><code>&nbsp;> LIST
&nbsp;  10 print "Hello World"
&nbsp;> RUN
&nbsp;  Hello World
</code></pre>

To replace a line, type it again with the same number. To delete a line,
type only its number.

<pre><code>&nbsp;> 10
&nbsp;> LIST
</code></pre>

Statements without a line number are not run immediately. Only commands
such as `RUN` and `LIST` may be typed that way.

<pre><code>&nbsp;> PRINT 1
&nbsp;  ILLEGAL DIRECT
</code></pre>

Mistakes are caught as soon as a line is entered, and the line is not
saved. The numbers in parentheses are the columns of the statement at fault.

<pre><code>&nbsp;> 20 PRINT (1 + 2
&nbsp;  SYNTAX ERROR IN 20 (12..12); UNBALANCED PARENTHESES
</code></pre>

Here is a program that asks for a number and counts up to it.

<pre><code>&nbsp;> 10 INPUT N
&nbsp;> 20 I = 1
&nbsp;> 30 PRINT I
&nbsp;> 40 I = I + 1
&nbsp;> 50 IF I > N THEN 70
&nbsp;> 60 GOTO 30
&nbsp;> 70 END
&nbsp;> RUN
&nbsp;  N ? 3
&nbsp;  1
&nbsp;  2
&nbsp;  3
</code></pre>

Stop a running program with CTRL-C. To watch a program work one line at a
time, use `DEBUG` instead of `RUN`.

Save your work with `SAVE "count.bas"` and bring it back later with
`OLD "count.bas"`, or start the interpreter with `minibasic count.bas`.

*/
