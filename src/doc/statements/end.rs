/*!
# `END`

## Purpose
Immediately and unconditionally stop running the program
and return to the command prompt.

## Remarks
`END` at the end of a program is optional.

## Example
```text
10 PRINT "HELLO"
20 END
30 PRINT "THIS DOES NOT PRINT"
RUN
HELLO
```

*/
