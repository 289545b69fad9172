/*!
# Expressions and Numbers

Every value is a 64-bit floating point number. Variables are simply
names that refer to a value. Variable names start with an ASCII letter
followed by optional letters and digits. Names are case sensitive.

Reading a variable that has never been assigned is an error.

```text
10 PRINT Y
RUN
UNDEFINED VARIABLE IN 10; Y
```

Literals are written in decimal with an optional fraction and exponent.

```text
PRINT 3, 2.5, .5, 1E3, 2.5E-3
```

## Operators

From lowest to highest precedence:

| Operator | Meaning |
|----------|---------|
| `=` | Assignment, grouped right to left |
| `+` `-` | Addition and subtraction |
| `*` `/` | Multiplication and division |

Operators of equal precedence are grouped left to right, so
`10-3-2` is `5`. Parentheses override precedence. A leading `-`
negates the term that follows it, binding tighter than `+` and `-`
but looser than `*` and `/`.

Assignment is an expression. It stores the value on its right into the
variable on its left and yields that value.

```text
10 PRINT A = 2, A * 3
RUN
2 6
```

Division by zero does not stop the program; it yields `inf`, `-inf`,
or `nan`.

## Comparisons

`IF` compares two expressions with `=`, `<`, or `>`. Comparisons are
not operators and can only appear in an `IF` statement.
*/
