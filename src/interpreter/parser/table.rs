use std::fmt::Write;

use crate::interpreter::parser::precedence::PRECEDENCE_TABLE;

/// A grammar rule together with the postfix code it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Production {
    /// Left-hand side non-terminal.
    pub lhs:      &'static str,
    /// Right-hand side symbols, separated by spaces.
    pub rhs:      &'static str,
    /// The code the rule contributes, in postfix notation.
    pub emits:    &'static str,
    /// Precedence override for the rule, if any.
    pub prec_tag: Option<&'static str>,
}

/// Every production of the grammar, in the order the parser tries them.
pub const PRODUCTIONS: [Production; 12] =
    [Production { lhs:      "statement",
                  rhs:      "ID ASSIGN expr",
                  emits:    "store ID <- expr",
                  prec_tag: None, },
     Production { lhs:      "statement",
                  rhs:      "PRINT LPAREN expr RPAREN",
                  emits:    "yield expr",
                  prec_tag: None, },
     Production { lhs:      "expr",
                  rhs:      "expr PLUS expr",
                  emits:    "expr expr +",
                  prec_tag: None, },
     Production { lhs:      "expr",
                  rhs:      "expr MINUS expr",
                  emits:    "expr expr -",
                  prec_tag: None, },
     Production { lhs:      "expr",
                  rhs:      "expr TIMES expr",
                  emits:    "expr expr *",
                  prec_tag: None, },
     Production { lhs:      "expr",
                  rhs:      "expr DIVIDE expr",
                  emits:    "expr expr /",
                  prec_tag: None, },
     Production { lhs:      "expr",
                  rhs:      "MINUS expr",
                  emits:    "expr neg",
                  prec_tag: Some("-u"), },
     Production { lhs:      "expr",
                  rhs:      "LPAREN expr RPAREN",
                  emits:    "expr",
                  prec_tag: None, },
     Production { lhs:      "expr",
                  rhs:      "NUM",
                  emits:    "NUM",
                  prec_tag: None, },
     Production { lhs:      "expr",
                  rhs:      "COMPLEX",
                  emits:    "COMPLEX",
                  prec_tag: None, },
     Production { lhs:      "expr",
                  rhs:      "ID",
                  emits:    "load ID",
                  prec_tag: None, },
     Production { lhs:      "expr",
                  rhs:      "SQRT LPAREN expr RPAREN",
                  emits:    "expr sqrt",
                  prec_tag: None, }];

/// Renders the productions and the precedence table as plain text.
///
/// Only the constant tables are read; rendering has no effect on parsing.
///
/// # Example
/// ```
/// use cxcalc::interpreter::parser::table::render_table;
///
/// let text = render_table();
/// assert!(text.contains("expr -> MINUS expr"));
/// assert!(text.contains("right"));
/// ```
#[must_use]
pub fn render_table() -> String {
    let mut out = String::from("=== Productions ===\n");

    for (i, production) in PRODUCTIONS.iter().enumerate() {
        let _ = write!(out, "{i:>2}: {} -> {}", production.lhs, production.rhs);
        if let Some(tag) = production.prec_tag {
            let _ = write!(out, " %prec {tag}");
        }
        let _ = writeln!(out, "    => {}", production.emits);
    }

    out.push_str("\n=== Precedence (lowest first) ===\n");
    for level in PRECEDENCE_TABLE {
        let _ = writeln!(out,
                         "{:>2}  {:<5}  {}",
                         level.precedence,
                         level.associativity.name(),
                         level.operators.join(" "));
    }

    out
}
