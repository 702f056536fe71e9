//! # Tokenizador para Marathi
//!
//! Divide o texto bruto em tokens (palavras e pontuações). Cada pontuação do
//! conjunto fixo [`PUNCTUATION`] vira sempre um token isolado, mesmo colada a
//! outras letras; qualquer outra sequência de caracteres que não seja espaço
//! forma uma única palavra.
//!
//! Cada token preserva sua posição original no texto (offset em bytes) para
//! permitir destacar palavras na interface web.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use pos_core::tokenizer::tokenize;
//!
//! let tokens = tokenize("राम,आहे.");
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["राम", ",", "आहे", "."]);
//! ```

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Um token extraído do texto original.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// O texto do token (ex: "राम", ",").
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token na lista (0, 1, 2...).
    pub index: usize,
}

/// Pontuações isoladas pelo tokenizador.
///
/// `।` (danda) é o marcador de fim de sentença do Devanágari. Outros símbolos
/// (hífen, `॥`, aspas tipográficas...) são tratados como letras comuns.
pub const PUNCTUATION: &[char] = &['।', ',', '.', '!', '?', ';', ':', '\'', '"', '(', ')'];

/// Uma pontuação sozinha OU a maior sequência possível de caracteres que não
/// sejam espaço nem pontuação.
fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let class = regex::escape(&PUNCTUATION.iter().collect::<String>());
        Regex::new(&format!(r"[{class}]|[^\s{class}]+")).expect("regex do tokenizador é válida")
    })
}

/// Verifica se o caractere pertence ao conjunto de pontuações isoladas.
pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION.contains(&ch)
}

/// Tokeniza um texto. Texto vazio ou só com espaços produz uma lista vazia.
pub fn tokenize(text: &str) -> Vec<Token> {
    token_regex()
        .find_iter(text)
        .enumerate()
        .map(|(index, m)| Token {
            text: m.as_str().to_string(),
            start: m.start(),
            end: m.end(),
            index,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_punctuation_is_isolated() {
        assert_eq!(texts("राम,आहे."), vec!["राम", ",", "आहे", "."]);
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("\t\n ").is_empty());
    }

    #[test]
    fn test_danda_and_adjacent_punctuation() {
        assert_eq!(
            texts("तो (घरी) गेला।\"हो\"!?"),
            vec!["तो", "(", "घरी", ")", "गेला", "।", "\"", "हो", "\"", "!", "?"]
        );
    }

    #[test]
    fn test_other_symbols_stay_inside_words() {
        // Hífen e double danda não fazem parte do conjunto fixo
        assert_eq!(texts("मुंबई-पुणे ॥"), vec!["मुंबई-पुणे", "॥"]);
    }

    #[test]
    fn test_offsets_and_indices() {
        let text = "मी  आलो.";
        let tokens = tokenize(text);
        assert_eq!(tokens.len(), 3);
        for (i, tok) in tokens.iter().enumerate() {
            assert_eq!(tok.index, i);
            assert_eq!(&text[tok.start..tok.end], tok.text);
        }
    }

    #[test]
    fn test_is_punctuation() {
        assert!(is_punctuation('।'));
        assert!(is_punctuation('('));
        assert!(!is_punctuation('-'));
        assert!(!is_punctuation('र'));
    }

    #[test]
    fn test_every_punctuation_char_is_split() {
        for &ch in PUNCTUATION {
            let input = format!("अ{ch}ब");
            assert_eq!(texts(&input), vec!["अ".to_string(), ch.to_string(), "ब".to_string()], "{ch}");
        }
    }
}
