/*!
# `GOSUB <label>`

## Purpose
Remember where we are and move execution to a label.

## Remarks
`RETURN` continues after the `GOSUB`, including any statements that
follow it on the same line.

## Example
```text
gosub greet: print "WORLD"
end
greet:
print "HELLO"
return
RUN
HELLO
WORLD
```

*/
