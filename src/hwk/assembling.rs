//! Assembling
//!
//! Joins the rewriter's pieces into the final Lua source. Kept apart from the rewriter
//! because pieces can still be taken back while rewriting; only the final list is flat.

use crate::hwk::rewriting::Piece;

pub fn assemble(pieces: &[Piece<'_>]) -> String {
    let len = pieces.iter().map(|piece| piece.as_str().len()).sum();
    let mut output = String::with_capacity(len);
    for piece in pieces {
        output.push_str(piece.as_str());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_in_order() {
        let pieces = vec![
            Piece::Generated("__match[a] =".to_string()),
            Piece::Source(" b"),
            Piece::LineBreak("\n"),
        ];
        assert_eq!(assemble(&pieces), "__match[a] = b\n");
    }

    #[test]
    fn test_assemble_nothing() {
        assert_eq!(assemble(&[]), "");
    }
}
