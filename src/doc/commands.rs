/*!
# Commands

## `VAR <name>`
Documents a variable. Generates no code.

## `SET <name> <value...>`
Stores the C expression formed by the rest of the line. The expression is
not checked; a bad one is reported by the C compiler.

## `INPUT <name>`
Reads one integer from standard input. Anything else stops the program
with `Failed to read input.`

## `PRINT <name-or-integer>`
Prints an integer literal or the value of a variable, followed by a
newline.

## `MATH <name> = <operand> [<op> <operand>]`
`<op>` is one of `+ - * /`; division truncates. Only one operator is
allowed. The operator is the first of `+`, `-`, `*`, `/`, in that order,
that appears anywhere in the expression, so `MATH y = x * -3` splits on the
`-` sign and does not do what it looks like.

```text
SET a 10
SET b 3
MATH c = a / b
PRINT c
3
```

## `IF <operand> <cmp> <operand>` ... `[ELSE` ...`]` `ENDIF`
`<cmp>` is one of `> < == != >= <=`. Blocks nest. An `ELSE` or `ENDIF`
without a matching `IF` is reported and skipped. An `IF` without `ENDIF`
is left open and the C compiler rejects the program.

```text
SET x 5
IF x > 3
PRINT 1
ELSE
PRINT 0
ENDIF
1
```

An operand is an integer literal with an optional leading `-`, or a
variable name.

*/
