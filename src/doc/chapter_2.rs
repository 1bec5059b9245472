/*!
# Programs

Program memory holds 64000 bytes. Each line takes its length plus one,
and no line may be longer than 63 characters. When memory is full,
storing another line raises `OUT OF MEMORY` and nothing is changed.

## Editing

The counter points at the line that runs next, and it is also where
edits happen.

 * `:goto 0005` or `:goto LOOP` moves the counter.
 * `:prog <line>` stores a line at the counter and advances. In `OVR`
   mode it replaces the line there; in `INS` mode it pushes the rest of
   the program down. `:mode` switches between the two.
 * `:del` blanks the line at the counter in `OVR` mode and removes it
   in `INS` mode.
 * `:comment` turns the line at the counter into a comment, or back.

Inserting or deleting a line rewrites every numeric address that points
at or past it, so jumps keep landing on the same instruction.

```text
0000  GOTO 0003        0000  GOTO 0004
0001  1          ->    0001  7           <- inserted
0002  2                0002  1
0003  +                0003  2
                       0004  +
```

Label operands are never rewritten since they follow the `LBL` line
wherever it goes.

## Running

`:run` runs from the counter until a `STOP` line, the end of the
program, an error, or CTRL-C. `:step` runs a single line.
`:trace on` prints every line before it runs.

Errors show the address of the failing line.

```text
DIVISION BY ZERO IN 0002
```

## Subroutines

`GOSUB` remembers where it was called from and `RETURN` continues on
the line after the call. Calls nest 100 deep; one more raises
`STACK OVERFLOW`. `:calls` shows the pending returns.

*/
