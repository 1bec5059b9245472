/*!
# Introductory Tutorial for the MK-52

Begin by opening a terminal and running the executable. The prompt shows
the program counter, the edit mode and the angle mode.
Type CTRL-D to exit.
<pre><code>&nbsp;> 0000 OVR DEG> █
</code></pre>

 Stop a running program with CTRL-C.

The MK-52 is a Reverse Polish Notation calculator. There are no
parentheses and no `=` key. You push numbers onto the operand stack and
each function takes its operands from the stack and leaves its result
there. For this tutorial, I'll mark lines that you type with a "`>`".

<pre><code>&nbsp;> 2
&nbsp;  X: 2
&nbsp;> 3
&nbsp;  X: 3
&nbsp;> +
&nbsp;  X: 5
</code></pre>

Anything typed without a leading colon runs immediately, exactly as if
you pressed the key. Commands starting with a colon talk to the machine
itself. `:prog` stores a line at the program counter and moves to the
next line.

<pre><code>&nbsp;> :prog 2
&nbsp;  0001>
&nbsp;> :prog 3
&nbsp;  0002>
&nbsp;> :prog +
&nbsp;  0003>
&nbsp;> :list
&nbsp;   0000  2
&nbsp;   0001  3
&nbsp;   0002  +
&nbsp;> :reset
&nbsp;> :run
&nbsp;  END
&nbsp;  X: 5
</code></pre>

`:reset` puts the counter back on the first line. `:run` continues from
wherever the counter is, so a program halted by `STOP` picks up on the
line after it.

Every line has a four digit address. `GOTO 0002` jumps to line 2 and
stays pointed at the same line when you insert or delete lines above
it; the address is rewritten for you. A label gives a line a name
instead: `LBL LOOP` and `GOTO LOOP`.

Programs are plain text, one line per program line. Save one with
`:save name.txt` and bring it back with `:load name.txt`, or name the
file on the command line.

*/
