/*!
# `[LET] <variable> = <expression>`

## Purpose
Assigns a value to a variable.

## Remarks
The word `LET` is optional. A variable comes into existence the first
time it is assigned.

## Example
```text
let a = 1
b = a + 1
print b
RUN
2
```

*/
