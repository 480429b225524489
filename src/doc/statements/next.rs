/*!
# `NEXT <variable>`

## Purpose
Closes the body of a `FOR` loop.

## Remarks
See `FOR`. A `NEXT` for a variable with no running loop is a
`NEXT WITHOUT FOR` error.

*/
