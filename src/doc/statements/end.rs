/*!
# `END`

## Purpose
Stop the program.

## Remarks
Statements after `END` on the same line do not execute. Running off the
last line of the program has the same effect.

## Example
```text
print "HELLO"
end
print "NEVER"
RUN
HELLO
```

*/
