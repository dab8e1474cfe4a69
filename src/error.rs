//! 統一的なエラーハンドリングモジュール
//!
//! 型仕様パーサーの失敗分類（`ParserError`）、呼び出し元に返すエラー
//! （`TypeSpecError`）、および複数行のチェック時に診断情報を蓄積する
//! 仕組みを提供します。

use crate::ast::Span;
use crate::lexer::Token;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

/// パーサーが期待していたもの
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// 型名またはフィールド名
    Text,
    /// 特定の記号（`]`、`:` など）
    Literal(Token),
    /// 型（名前・`*`・構造のいずれか）
    Type,
}

/// パーサーエラーの詳細
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("No type specified.")]
    EmptyInput,

    #[error("Unexpected end of input.")]
    UnexpectedEof { span: Span },

    #[error("{}", unexpected_token_message(.expected, .found))]
    UnexpectedToken {
        expected: Expected,
        found: String,
        span: Span,
    },

    #[error("Function types are not supported. To validate that something is a function, you may use 'Function'.")]
    UnsupportedFunctionType { span: Span },

    #[error("No comment before comment separator '::' found.")]
    MissingCommentSeparator { span: Span },

    #[error("Must specify type of Array - eg. [Type], got [] instead.")]
    EmptyArrayElementType { span: Span },

    #[error("Tuple must be of at least length 1 - eg. (Type), got () instead.")]
    EmptyTuple { span: Span },

    #[error("Structures may be nested at most {limit} levels deep.")]
    NestingTooDeep { limit: usize, span: Span },
}

fn unexpected_token_message(expected: &Expected, found: &str) -> String {
    match expected {
        Expected::Text => format!("Expected text, got '{}' instead.", found),
        Expected::Literal(op) => format!("Expected '{}', got '{}' instead.", op, found),
        Expected::Type => format!("Unexpected character: {}", found),
    }
}

impl ParserError {
    /// 失敗した位置（入力が空の場合はなし）
    pub fn span(&self) -> Option<Span> {
        match self {
            ParserError::EmptyInput => None,
            ParserError::UnexpectedEof { span }
            | ParserError::UnexpectedToken { span, .. }
            | ParserError::UnsupportedFunctionType { span }
            | ParserError::MissingCommentSeparator { span }
            | ParserError::EmptyArrayElementType { span }
            | ParserError::EmptyTuple { span }
            | ParserError::NestingTooDeep { span, .. } => Some(*span),
        }
    }
}

/// `parse_type` が返すエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeSpecError {
    /// 構文解析を始める前に拒否された入力（空入力・関数型）
    #[error(transparent)]
    Rejected(ParserError),

    /// 構文解析中の失敗。未消費のトークンと元の入力を保持する
    #[error("{error} - Remaining tokens: {} - Initial input: '{input}'", format_remaining(.remaining))]
    Parse {
        error: ParserError,
        remaining: Vec<String>,
        input: String,
    },
}

/// 未消費トークンをJSON配列として整形
fn format_remaining(remaining: &[String]) -> String {
    serde_json::to_string(remaining).unwrap_or_else(|_| format!("{:?}", remaining))
}

impl TypeSpecError {
    /// 元になった分類上のエラー
    pub fn error(&self) -> &ParserError {
        match self {
            TypeSpecError::Rejected(error) | TypeSpecError::Parse { error, .. } => error,
        }
    }

    /// 失敗時点で未消費だったトークン
    pub fn remaining(&self) -> &[String] {
        match self {
            TypeSpecError::Rejected(_) => &[],
            TypeSpecError::Parse { remaining, .. } => remaining,
        }
    }

    pub fn span(&self) -> Option<Span> {
        self.error().span()
    }
}

/// チェック処理のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// 型仕様の解析エラー
    #[error(transparent)]
    Spec(#[from] TypeSpecError),

    /// 解析後に読み残されたトークン（警告として扱う）
    #[error("trailing tokens were ignored: {}", format_remaining(.tokens))]
    TrailingTokens { tokens: Vec<String>, span: Span },

    /// ファイルI/Oエラー
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },
}

impl CheckError {
    pub fn span(&self) -> Option<Span> {
        match self {
            CheckError::Spec(e) => e.span(),
            CheckError::TrailingTokens { span, .. } => Some(*span),
            CheckError::Io { .. } => None,
        }
    }
}

/// エラー情報とソースの位置情報を含むエラー
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: CheckError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: CheckError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// codespan-reportingのDiagnosticに変換
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let (diagnostic, label) = match &self.error {
            CheckError::Spec(e) => (
                Diagnostic::error().with_message(e.error().to_string()),
                "ここで解析に失敗しました",
            ),
            CheckError::TrailingTokens { .. } => (
                Diagnostic::warning().with_message(self.error.to_string()),
                "この位置以降は読み込まれません",
            ),
            CheckError::Io { .. } => (Diagnostic::error().with_message(self.error.to_string()), ""),
        };

        let labels = match self.error.span() {
            Some(span) => vec![Label::primary(self.file_id, span.start..span.end).with_message(label)],
            None => vec![],
        };

        let notes = match &self.error {
            CheckError::Spec(e) if !e.remaining().is_empty() => {
                vec![format!("remaining tokens: {}", format_remaining(e.remaining()))]
            }
            _ => vec![],
        };

        diagnostic.with_labels(labels).with_notes(notes)
    }
}

/// 複数のエラーを蓄積するためのコレクター
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<DiagnosticError>,
    warnings: Vec<DiagnosticError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// エラーを追加
    pub fn add_error(&mut self, error: CheckError, file_id: usize) {
        self.errors.push(DiagnosticError::new(error, file_id));
    }

    /// 警告を追加
    pub fn add_warning(&mut self, error: CheckError, file_id: usize) {
        self.warnings.push(DiagnosticError::new(error, file_id));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn errors(&self) -> &[DiagnosticError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[DiagnosticError] {
        &self.warnings
    }
}
