/*!
# Functions

Functions are called with parentheses, even when they take no
arguments. A variable with the same name as a function hides it.
Programs embedding linebasic may register more functions or replace
these.
*/

pub mod ABS {
    /*!
    ## `ABS(X)` Returns the absolute value of X.
    ```text
    print abs(-0.125)
    0.125
    ```
    */
}

pub mod MAX {
    /*!
    ## `MAX(X, Y)` Returns the larger of X and Y.
    ```text
    print max(3, 7)
    7
    ```
    */
}

pub mod MIN {
    /*!
    ## `MIN(X, Y)` Returns the smaller of X and Y.
    ```text
    print min(3, 7)
    3
    ```
    */
}

pub mod NUM {
    /*!
    ## `NUM(X$)` Returns X$ converted to a number.
    A string that is not a number is a `TYPE MISMATCH`.
    ```text
    print num("2") * 3
    6
    ```
    */
}

pub mod RND {
    /*!
    ## `RND()` Returns a random number from 0 up to but not including 1.
    ```text
    print rnd()
    0.7281944170373604
    ```
    */
}

pub mod STR {
    /*!
    ## `STR(X)` Returns X converted to a string.
    ```text
    print str(1) + str(2)
    12
    ```
    */
}
