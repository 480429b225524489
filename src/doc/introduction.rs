/*!
# Introductory Tutorial for linebasic

linebasic runs a whole program from a text file. There is no prompt and
no line numbers. Save the following as `hello.bas`:

```text
print "Hello World"
```

Then run it.

```text
$ linebasic hello.bas
Hello World
```

Stop a running program with CTRL-C.

A program is a sequence of statements, one per line. Several statements
can share a line when separated by a colon.

```text
let a = 10
print "a is " + a : print "twice a is " + (a * 2)
```

Anything after an apostrophe or the word `REM` is ignored.

```text
' count to three
for i = 1 to 3
    print i   ' one per line
next i
```

Execution jumps to a label with `GOTO`. A label is a name followed by a
colon at the start of a statement. Labels can appear before or after the
jump that uses them.

```text
goto skip
print "never printed"
skip:
print "done"
```

Decisions use `IF`, `THEN`, an optional `ELSE`, and `ENDIF`. Blocks may
span lines or fit on one.

```text
input age
if age < 18 then
    print "minor"
else
    print "adult"
endif
if age = 0 then print "newborn" else print "welcome" endif
```

A program ends when it runs off the last line or reaches `END`. If an
error occurs, it is printed in bold along with the line where it
happened and the program stops.

```text
$ linebasic broken.bas
?UNDECLARED VARIABLE IN 2; x
print x + 1
```

Set `LINEBASIC_LOG=debug` to watch jumps and loop iterations on stderr.

*/
