//! C/C++ sources shared by the integration tests.

use once_cell::sync::Lazy;

/// A small, well-formed translation unit.
pub const WELL_FORMED: &str = r#"#include <stdio.h>
#define SQUARE(x) ((x) * (x))

/* Entry point.
   Prints a greeting. */
int main(int argc, char *argv[]) {
    const char *s = "hello, \"world\"\n";
    for (int i = 0; i < argc; ++i) {
        if (argv[i][0] == '-')
            continue;
        printf("%s %d\n", s, SQUARE(i));
    }
    return 0x0;
}"#;

/// One extra `}` on line 2 (index 1).
pub const EXTRA_BRACE: &str = "int a;\n}\nint b;";

/// Many copies of one function, for rescans over a long buffer.
pub static LONG_SOURCE: Lazy<String> = Lazy::new(|| {
    (0..200)
        .map(|i| {
            format!(
                "/* helper {i} */\nstatic int helper_{i}(int v) {{\n    return v * {i};\n}}\n"
            )
        })
        .collect()
});
