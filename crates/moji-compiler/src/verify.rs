use crate::{CompileError, Encoding, Result};

/// Parse scalar output with the regex syntax parser.
pub(crate) fn check_syntax(source: &str, encoding: Encoding) -> Result<()> {
    if encoding != Encoding::Scalar {
        return Ok(());
    }
    regex_syntax::Parser::new()
        .parse(source)
        .map(|_| ())
        .map_err(|e| CompileError::InvalidPattern(e.to_string()))
}
