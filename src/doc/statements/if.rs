/*!
# `IF <expression> THEN <statements> [ELSE <statements>] ENDIF`

## Purpose
Do something contingent on a predicate.

## Remarks
The statements may be on the same line as `THEN` and `ELSE` or on the
lines that follow. Blocks nest; each `ENDIF` closes the innermost open
`IF`. A false `IF` without `ELSE` or `ENDIF` is an `IF WITHOUT ENDIF`
error.

## Example
```text
a = 10
if a < 30 then print "SMALL" else print "BIG" endif
if a = 10 then
    print "TEN"
else
    print "NOT TEN"
endif
RUN
SMALL
TEN
```

*/
