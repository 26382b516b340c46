// Lexer tests over whole sources

use cinspect::parser::lexer::{tokenize, Token, TokenKind};

const SOURCES: [&str; 7] = [
    "int a = 5;\nfloat b = a + 3.14;",
    "# define LIMIT 10\nint n = LIMIT;",
    "#include <stdio.h>\n/* multi\n   line */ int x = 0x1F; // done",
    "char c = '\\n';\nchar *s = \"a \\\"q\\\" b\";",
    "int a = 5$ @;\n\"unclosed\n/* open",
    "while (a<=10) { a=(a+1)*2; }\n\tif(a!=b){foo(a,b);}",
    "",
];

/// Place every lexeme at its recorded location, filling gaps with spaces
fn reconstruct(tokens: &[Token], source: &str) -> String {
    let mut lines: Vec<Vec<char>> = source
        .split('\n')
        .map(|l| vec![' '; l.chars().count()])
        .collect();

    for token in tokens {
        let (mut line, mut column) = (token.line, token.position);
        for c in token.lexeme.chars() {
            if c == '\n' {
                line += 1;
                column = 0;
                continue;
            }
            lines[line][column] = c;
            column += 1;
        }
    }

    lines
        .iter()
        .map(|l| l.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn blank_whitespace(source: &str) -> String {
    source
        .chars()
        .map(|c| if c.is_whitespace() && c != '\n' { ' ' } else { c })
        .collect()
}

#[test]
fn test_tokens_reconstruct_source() {
    for source in SOURCES {
        let (tokens, _) = tokenize(source);
        assert_eq!(reconstruct(&tokens, source), blank_whitespace(source), "source: {source:?}");
    }
}

#[test]
fn test_tokens_are_in_source_order() {
    for source in SOURCES {
        let (tokens, _) = tokenize(source);
        for pair in tokens.windows(2) {
            assert!(
                pair[0].end_location() <= pair[1].location(),
                "{} overlaps {} in {source:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn test_every_lexical_error_has_an_error_token() {
    for source in SOURCES {
        let (tokens, errors) = tokenize(source);
        let error_tokens: Vec<&Token> = tokens.iter().filter(|t| t.kind.is_error()).collect();
        assert_eq!(error_tokens.len(), errors.len(), "source: {source:?}");
        for (token, error) in error_tokens.iter().zip(&errors) {
            assert_eq!(token.location(), error.location());
        }
    }
}

#[test]
fn test_error_kinds() {
    let (tokens, errors) = tokenize(SOURCES[4]);
    let kinds: Vec<TokenKind> = tokens
        .iter()
        .filter(|t| t.kind.is_error())
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::UnexpectedCharacter,
            TokenKind::UnexpectedCharacter,
            TokenKind::UnclosedString,
            TokenKind::UnclosedComment,
        ]
    );
    let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Unexpected character '$'",
            "Unexpected character '@'",
            "Unclosed string literal",
            "Unclosed block comment",
        ]
    );
}

#[test]
fn test_retokenizing_reconstruction_is_stable() {
    for source in SOURCES {
        let (tokens, _) = tokenize(source);
        let rebuilt = reconstruct(&tokens, source);
        let (again, _) = tokenize(&rebuilt);
        assert_eq!(tokens, again, "source: {source:?}");
    }
}
