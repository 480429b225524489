/*!
# `REM <anything>` or `' <anything>`

## Purpose
Embeds non-executing remarks into the program source code.

## Remarks
Remarks run to the end of the line and may follow a statement.

## Example
```text
REM Authored by Zaphod
print 42 ' Answer to everything.
RUN
42
```

*/
