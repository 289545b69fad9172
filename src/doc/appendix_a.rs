/*!
# Error Messages

Errors raised while a line is being entered leave the program
unchanged. Errors raised while running stop the program and name
the line that failed.

| Code | Message | Cause |
|------|---------|-------|
| 2 | `SYNTAX ERROR` | A statement or expression could not be understood. |
| 6 | `OVERFLOW` | A line number or literal is too large. |
| 8 | `UNDEFINED LINE` | `GOTO` or `IF` named a line that does not exist. |
| 12 | `ILLEGAL DIRECT` | A statement was typed without a line number. |
| 23 | `LINE BUFFER OVERFLOW` | A line is longer than 1024 characters. |
| 51 | `INTERNAL ERROR` | A bug in the interpreter. |
| 53 | `FILE NOT FOUND` | `OLD` could not find the file. |
| 66 | `DIRECT STATEMENT IN FILE` | A loaded file has a line without a line number. |
| 70 | `BREAK` | CTRL-C, or `Q` while debugging. |
| 71 | `UNDEFINED VARIABLE` | A variable was read before it was assigned. |
| 72 | `ILLEGAL ASSIGNMENT` | Something other than a variable is left of `=`. |
| 73 | `ILLEGAL OPERATOR` | `=` missing from `LET`, or a bad `IF` comparison. |
| 74 | `INVALID STATEMENT` | A line does not start with a statement. |
| 75 | `EXTRANEOUS TOKEN` | Something follows a complete statement. |
| 76 | `INVALID NUMBER` | `INPUT` received something other than a number. |
| 77 | `I/O ERROR` | The terminal or a file could not be read or written. |

Syntax errors show the columns of the statement text at fault.

```text
10 LET A + 1
ILLEGAL OPERATOR IN 10 (6..7); +
```
*/
