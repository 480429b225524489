/*!
# Expressions and Types

There are two types of data: numbers and strings. Numbers are 64-bit
floating point. Strings are any sequence of characters. A variable
holds either and may change from one to the other when assigned.

Variable names start with a letter followed by letters or digits. Names are case sensitive: `a` and `A` are two
variables. Keywords are not case sensitive: `PRINT`, `print`, and
`Print` are the same statement.

```text
let pi = 3.14
pi2 = pi * 2
name = "Zaphod"
```

String literals are enclosed in double quotes and accept the escapes
`\n`, `\t`, `\\`, and `\"`.

## Operators

From lowest to highest precedence:

| Operators | Meaning |
|-----------|---------|
| `OR` `AND` | logical |
| `=` `<>` `<` `>` `<=` `>=` | comparison |
| `+` `-` | addition, subtraction, string join |
| `*` `/` | multiplication, division |
| `^` | exponentiation |

Operators of equal precedence group to the right, so `10-4-3` is `9`
and `2^3^2` is `512`. Use parentheses when that matters.

The unary operators `-`, `+`, and `NOT` apply to the single value that
follows them, so `-2^2` is `4`.

Comparisons and logical operators produce `1` for true and `0` for false.

## Mixing types

When an operator has a number on one side and a string on the other,
the number is converted to a string. Only `+`, `=`, and `<>` work on
strings; everything else is a `TYPE MISMATCH`.

```text
print "a" + 1
a1
print 1 + "2"
12
print "2" * 3
?TYPE MISMATCH IN 1; ONLY + = <> WORK ON STRINGS
```

Numbers print in the shortest form that reads back as the same number.
Division by zero is not an error; it produces infinity.

## Conditions

`IF`, `UNTIL`, and `ASSERT` test a value by comparing it with zero.
Anything that is not equal to zero is true, including strings other
than `"0"`.

*/
