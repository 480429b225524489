/*!
# `RETURN`

## Purpose
Continue after the most recent `GOSUB`.

## Remarks
A `RETURN` with no `GOSUB` to return to is a `RETURN WITHOUT GOSUB`
error. See `GOSUB`.

*/
