/*!
# `GOTO <label>`

## Purpose
Immediately and unconditionally move execution to a label.

## Remarks
If `<label>` doesn't exist an `UNDEFINED LABEL` error occurs before
the program starts running.

## Example
```text
goto there
print "THIS WILL NOT PRINT"
there:
print "THIS WILL PRINT"
```

*/
