/*!
# `INPUT <variable>[,<variable>...]`

## Purpose
Suspends execution and awaits a response from the terminal.

## Remarks
One line is read for every variable. A line that reads as a number is
stored as a number, anything else as a string.

## Example
```text
input name, age
print name + " is " + age
```

*/
