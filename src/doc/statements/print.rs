/*!
# `PRINT [<expression>]`

## Purpose
Prints one value on a line of its own.

## Remarks
Without an expression, prints an empty line. Join values with `+`.

## Example
```text
print "A" + 1
print
print 1 / 3
RUN
A1

0.3333333333333333
```

*/
