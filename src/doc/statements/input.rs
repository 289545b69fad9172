/*!
# `INPUT <variable>`

## Purpose
Suspends execution and awaits a number from the terminal.

## Remarks
The prompt is the variable name followed by ` ? `.
Anything other than a number stops the program with `INVALID NUMBER`.

## Example
```text
10 INPUT N
20 PRINT N * 2
RUN
N ? 21
42
```

*/
