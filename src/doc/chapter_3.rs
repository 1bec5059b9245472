/*!
# Function Reference

Functions are listed in the order the machine numbers them. Several
have a second spelling taken from the calculator keyboard; both are
accepted when typing.

| Id | Function | Also | Action |
|----|----------|------|--------|
| 0 | *(empty line)* | | Nothing |
| 1 | `# text` | | Comment |
| 2 | *number* | | Push the number |
| 3 | `STOP` | | Halt; `:run` continues after it |
| 4 | `GOTO a` | | Jump to line or label `a` |
| 5 | `GOSUB a` | | Call a subroutine |
| 6 | `RETURN` | | Continue after the last `GOSUB` |
| 7 | `IF X<0 GOTO a` | | Jump when X is negative |
| 8 | `IF X=0 GOTO a` | | Jump when X is zero |
| 9 | `IF X>=0 GOTO a` | `IF X≥0 GOTO a` | Jump when X is not negative |
| 10 | `IF X!=0 GOTO a` | `IF X≠0 GOTO a` | Jump when X is not zero |
| 11-14 | `L0 a` .. `L3 a` | | Count register 0-3 down, jump while above zero |
| 15 | `LBL name` | | Name this line |
| 16 | `ENTER` | `↑` | Push a copy of X |
| 17 | `X<->Y` | `X↔Y` | Swap X and Y |
| 18 | `ROT` | | Rotate the stack down |
| 19 | `ROT UP` | | Rotate the stack up |
| 20 | `BX` | | Recall last X |
| 21 | `CX` | | Clear X |
| 22-25 | `+` `-` `*` `/` | | Y op X |
| 26 | `NEG` | `/-/` | Change sign |
| 27 | `1/X` | | Reciprocal |
| 28 | `X^2` | `X²` | Square |
| 29 | `SQRT` | `√` | Square root |
| 30 | `Y^X` | | Power |
| 31 | `10^X` | | Power of ten |
| 32 | `E^X` | | Exponential |
| 33 | `LG` | | Decimal logarithm |
| 34 | `LN` | | Natural logarithm |
| 35-37 | `SIN` `COS` `TG` | | In the current angle mode |
| 38-40 | `ARCSIN` `ARCCOS` `ARCTG` | | In the current angle mode |
| 41 | `PI` | `π` | Push pi |
| 42 | `ABS` | | Absolute value |
| 43 | `SIGN` | | -1, 0 or 1 |
| 44 | `[X]` | | Integer part |
| 45 | `{X}` | | Fractional part |
| 46 | `MAX` | | Larger of X and Y |
| 47 | `MOD` | | Y modulo X, Integers only |
| 48 | `RAND` | | Random Real in [0, 1) |
| 49 | `M->X r` | `M→X r` | Push register `r` |
| 50 | `X->M r` | `X→M r` | Store X in register `r` |
| 51 | `EM->X n` | `EM→X n` | Push extended cell `n` |
| 52 | `X->EM n` | `X→EM n` | Store X in extended cell `n` |
| 53-55 | `DEG` `RAD` `GRD` | | Set the angle mode |

A conditional jump never jumps when X is Empty.

When two spellings could match, the longest one wins, so `ROT UP` is
never read as `ROT`.

*/
