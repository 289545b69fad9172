/*!
# `PRINT ["<text>"][,<expression>...]`

## Purpose
Output information to the terminal for the operator.

## Remarks
Each `PRINT` outputs one line. Text and values are separated by a
single space. Expressions are evaluated left to right, so an assignment
in one is seen by the ones after it.

Numbers show at most six significant digits. Very large and very small
values use exponent notation such as `1.23457e+06`.

## Example
```text
10 A = 2
20 PRINT "A IS", A, A * A
30 PRINT 1 / 3
RUN
A IS 2 4
0.333333
```

*/
