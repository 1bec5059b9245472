/*!
# Numbers and the Stack

A value is one of three things.

 * Empty. A slot that was never written. Most functions given an Empty
   operand produce Empty.
 * Integer. Whole numbers from -9000000000000000000 to 9000000000000000000.
 * Real. Floating point.

Typing a number without a `.` or exponent gives an Integer.

```text
12
-3
2.5
1E3
```

Integer arithmetic that leaves the range does not wrap around. The
result becomes the Real 9E18 with the sign of the true result, the
largest value the display can show.

```text
9000000000000000000
1
+        X: 9E18
```

Division of two Integers stays an Integer only when it divides evenly.
`MOD` works on Integers alone and raises `TYPE MISMATCH` for a Real.

## The operand stack

There are five slots: X, the one you see, and four behind it. Pushing a
sixth value silently loses the deepest one. Functions take X (and Y for
two operand functions) and push their result. Two operand functions see
Y first, so `7 ENTER 2 -` gives 5.

 * `ENTER` pushes a copy of X.
 * `X<->Y` swaps X and Y.
 * `ROT` moves X to the bottom; `ROT UP` brings the bottom up to X.
 * `CX` clears X.
 * `BX` recalls the X that the last function consumed.

## Registers

Fifteen registers named `0` to `9` and `A` to `E`. `X->M A` copies X
into register A and `M->X A` pushes it back. Extended memory has 4000
more cells numbered `0000` to `3999`, used with `X->EM` and `EM->X`.
An address past the end raises `ADDRESSING ERROR`.

*/
