//! 型仕様ファイルのチェック処理モジュール
//!
//! 1行に1つの型仕様を記述したソースを解析し、複数のエラーを蓄積しながら
//! 処理を進める機能を提供します。空行と `#` で始まる行は無視されます。

use crate::ast::{Span, Types};
use crate::error::{CheckError, ErrorCollector};
use crate::lexer::token_texts;
use crate::parser::parse_type_prefix;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream, WriteColor};
use std::fs;
use std::path::Path;

/// 解析に成功した型仕様
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedSpec {
    /// 1始まりの行番号
    pub line: usize,
    pub source: String,
    pub types: Types,
}

/// チェック状態を管理する構造体
pub struct CheckSession {
    pub name: String,
    pub source: String,
    pub files: SimpleFiles<String, String>,
    pub error_collector: ErrorCollector,
}

impl CheckSession {
    /// ファイルからチェック状態を作成
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, CheckError> {
        let name = path.as_ref().display().to_string();
        let source = fs::read_to_string(path.as_ref()).map_err(|e| CheckError::Io {
            path: name.clone(),
            message: e.to_string(),
        })?;
        Ok(Self::from_source(&name, source))
    }

    /// 文字列からチェック状態を作成
    pub fn from_source(name: &str, source: String) -> Self {
        Self {
            name: name.to_string(),
            source,
            files: SimpleFiles::new(),
            error_collector: ErrorCollector::new(),
        }
    }

    /// チェック対象の行（行番号と前後の空白を除いた内容）
    pub fn specs(&self) -> Vec<(usize, &str)> {
        self.source
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    /// すべての行を解析する
    ///
    /// 各行は `名前:行番号` という個別のファイルとして登録されるため、
    /// 診断情報の位置はその行の中での位置になります。
    pub fn run(&mut self) -> Vec<CheckedSpec> {
        self.files = SimpleFiles::new();
        self.error_collector = ErrorCollector::new();

        let specs: Vec<(usize, String)> = self
            .specs()
            .into_iter()
            .map(|(line, text)| (line, text.to_string()))
            .collect();

        let mut checked = Vec::new();
        for (line, text) in specs {
            let file_id = self
                .files
                .add(format!("{}:{}", self.name, line), text.clone());

            match parse_type_prefix(&text) {
                Ok((types, rest)) => {
                    if let (Some(first), Some(last)) = (rest.first(), rest.last()) {
                        self.error_collector.add_warning(
                            CheckError::TrailingTokens {
                                tokens: token_texts(&rest),
                                span: Span::new(first.span.start, last.span.end),
                            },
                            file_id,
                        );
                    }
                    checked.push(CheckedSpec {
                        line,
                        source: text,
                        types,
                    });
                }
                Err(e) => {
                    log::debug!("{}:{}: {}", self.name, line, e);
                    self.error_collector.add_error(e.into(), file_id);
                }
            }
        }

        log::info!(
            "checked {} specification(s) in {}: {} error(s), {} warning(s)",
            checked.len() + self.error_collector.error_count(),
            self.name,
            self.error_collector.error_count(),
            self.error_collector.warning_count()
        );

        checked
    }

    /// 診断情報を指定の出力先に書き出す
    pub fn emit_diagnostics(&self, writer: &mut dyn WriteColor) -> Result<(), CheckError> {
        let config = codespan_reporting::term::Config::default();

        for diagnostic in self
            .error_collector
            .errors()
            .iter()
            .chain(self.error_collector.warnings())
        {
            codespan_reporting::term::emit(writer, &config, &self.files, &diagnostic.to_diagnostic())
                .map_err(|e| CheckError::Io {
                    path: self.name.clone(),
                    message: format!("Failed to emit diagnostic: {}", e),
                })?;
        }

        Ok(())
    }

    /// 診断情報を標準エラー出力に報告
    pub fn report_diagnostics(&self) -> Result<(), CheckError> {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let mut lock = writer.lock();
        self.emit_diagnostics(&mut lock)
    }

    /// エラーがあるかチェック
    pub fn has_errors(&self) -> bool {
        self.error_collector.has_errors()
    }

    /// 警告があるかチェック
    pub fn has_warnings(&self) -> bool {
        self.error_collector.has_warnings()
    }

    /// エラー数を取得
    pub fn error_count(&self) -> usize {
        self.error_collector.error_count()
    }

    /// 警告数を取得
    pub fn warning_count(&self) -> usize {
        self.error_collector.warning_count()
    }
}
