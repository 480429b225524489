/*!
# Errors

Every error stops the program. It is reported with the line of the
statement that was executing and, when there is more to say, a message.

```text
?FOR WITHOUT NEXT IN 4; i
```

| Error | Cause |
|-------|-------|
| `NEXT WITHOUT FOR` | `NEXT` for a variable with no running loop. |
| `SYNTAX ERROR` | Malformed statement, literal, or expression. |
| `RETURN WITHOUT GOSUB` | `RETURN` with nothing to return to. |
| `ILLEGAL FUNCTION CALL` | Wrong number of function arguments. |
| `OUT OF MEMORY` | Too many nested `GOSUB`. |
| `UNDEFINED LABEL` | `GOTO` or `GOSUB` to a label that doesn't exist. Reported before the program starts. |
| `TYPE MISMATCH` | A string where a number is required. |
| `UNDECLARED VARIABLE` | A name that is neither a variable nor a function. |
| `FOR WITHOUT NEXT` | A finished loop has no `NEXT` to skip to. |
| `IF WITHOUT ENDIF` | A false `IF` has no `ELSE` or `ENDIF`. |
| `ELSE WITHOUT IF` | `ELSE` outside of an `IF` block. |
| `UNTIL WITHOUT REPEAT` | `UNTIL` with no `REPEAT` before it. |
| `ASSERTION FAILED` | `ASSERT` of a false condition. |
| `UNEXPECTED END OF FILE` | The program ends in the middle of a statement. |
| `BREAK` | Interrupted with CTRL-C. |

*/
