/*!
# `[LET] <variable> = <expression>`

## Purpose
Assign a value to the variable.

## Remarks
The word `LET` is optional. Variable names are case sensitive,
so `A` and `a` are different variables.

## Example
```text
10 A = 10
20 PRINT A
30 LET A = A * 2
40 PRINT A
RUN
10
20
```

*/
