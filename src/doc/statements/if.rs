/*!
# `IF <expression> <comparison> <expression> THEN <line number>`

## Purpose
Move execution to a line only when a comparison holds.

## Remarks
The comparison is one of `=`, `<`, or `>`. Both sides are always
evaluated. When the comparison is false execution continues with the
next line.

## Example
```text
10 A = 10
20 PRINT A
30 A = A + 10
40 IF A < 30 THEN 20
RUN
10
20
```

*/
