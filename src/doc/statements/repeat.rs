/*!
# `REPEAT <statements> UNTIL <expression>`

## Purpose
Repeat statements until a condition holds.

## Remarks
The statements always execute at least once. Each `UNTIL` belongs to
the nearest unmatched `REPEAT` before it, so `GOTO` may leave or
re-enter the block freely. An `UNTIL` with no `REPEAT` to pair with is
an `UNTIL WITHOUT REPEAT` error.

## Example
```text
n = 0
repeat
    n = n + 1
    print n
until n = 3
RUN
1
2
3
```

*/
