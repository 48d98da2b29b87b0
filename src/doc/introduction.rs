/*!
# Introduction

A program is a plain text file with one command per line. Blank lines are
ignored, and so is any line whose first non-whitespace character is `#`.
There are no inline comments: a `#` later in a line is just another
operand.

<pre><code>&nbsp;# read a number and print its double
&nbsp;INPUT n
&nbsp;MATH d = n * 2
&nbsp;PRINT d
</code></pre>

Keywords are case-insensitive. Variable names are taken exactly as
written and may not contain whitespace.

Every value is a C `int`. A variable comes into existence the first time
`SET`, `INPUT` or `MATH` assigns it; reading it before then stops the
program with `Undefined variable`. At most 100 variables exist at once,
and only the first 31 characters of a name are significant.

## Building

<pre><code>&nbsp;etro [--keep-intermediates] [--debug-artifacts] [--skip-run] [--cc PROGRAM] SOURCE
</code></pre>

`prog.c`, `langlib.h` and `langlib.c` are written next to `SOURCE` and
compiled with `gcc -O2` (or `--cc`, or `$ETRO_CC`) into
`SOURCE_binary`. If compilation fails the compiler output is shown and the
sources are removed. Otherwise the executable runs with the terminal's
input and output. Press CTRL-C to stop it. All four files are removed
afterwards unless `--keep-intermediates` is given.

A mistake the translator can detect, such as a `MATH` line without `=`,
does not stop translation. The line becomes a C comment describing the
problem and the rest of the program is translated as usual.

*/
