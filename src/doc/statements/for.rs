/*!
# `FOR <variable> = x TO y`
Where x and y are expressions.
## Purpose
Used with `NEXT` to repeat execution of statements
while counting up by one.

## Remarks
On the first pass, x is assigned to the variable. Each `NEXT` adds one
and returns to the `FOR`, which evaluates y again. When the variable is
greater than y, execution continues after the matching `NEXT`.

The matching `NEXT` is found by variable name, not by nesting.
If the variable starts past the end, the body does not execute at all.

## Example 1
```text
for i = 1 to 3
    print "HELLO WORLD " + i
next i
RUN
HELLO WORLD 1
HELLO WORLD 2
HELLO WORLD 3
```

## Example 2
```text
for x = 1 to 2: for y = 5 to 6
    print x + "," + y
next y: next x
RUN
1,5
1,6
2,5
2,6
```

*/
