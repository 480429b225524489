/*!
# `ASSERT <expression>`

## Purpose
Stop the program unless a condition holds.

## Remarks
A false condition is an `ASSERTION FAILED` error reported at the line
of the `ASSERT`. Useful for tests written in BASIC.

## Example
```text
a = 2 + 2
assert a = 4
assert a = 5
RUN
?ASSERTION FAILED IN 3
```

*/
