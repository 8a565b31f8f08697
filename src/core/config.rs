//! # Test Configuration Module / 测试配置模块
//!
//! Loads the ini-style `test.config` that lives next to the user's feature
//! files. Only `general.tags` is consumed today, but lookups go through a
//! generic `get_or` so missing keys never turn into errors.
//!
//! The file is read the way Python's `configparser` reads it: option names
//! are case-insensitive, `[DEFAULT]` supplies values to every section,
//! indented lines continue the previous value, and a key before the first
//! section header is rejected.
//!
//! 加载与用户 feature 文件放在一起的 ini 格式 `test.config`。
//! 目前只使用 `general.tags`，但所有查找都通过通用的 `get_or` 完成，
//! 因此缺失的键永远不会变成错误。

use ini::{Ini, ParseOption};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

use crate::error::{ConfigSyntaxError, Result, RunnerError};

/// Section holding run-wide settings. / 保存运行范围设置的节。
pub const GENERAL_SECTION: &str = "general";
/// Section whose options every other section inherits. / 其他所有节继承其选项的节。
pub const DEFAULT_SECTION: &str = "DEFAULT";
/// Key for the tag expression. / 标签表达式的键。
pub const TAGS_KEY: &str = "tags";
/// Tag expression used when the config does not name one.
/// 配置未指定时使用的标签表达式。
pub const DEFAULT_TAGS: &str = "@smoke";

type Options = BTreeMap<String, String>;

/// The parsed contents of a test configuration file.
/// Read once at startup and never mutated afterwards.
///
/// 解析后的测试配置文件内容。
/// 在启动时读取一次，之后不再修改。
#[derive(Debug, Clone, Default)]
pub struct TestConfig {
    defaults: Options,
    sections: BTreeMap<String, Options>,
}

impl TestConfig {
    /// Parses configuration text. Values are taken literally: quotes and
    /// backslashes are not interpreted. Option names are lowercased and
    /// continuation lines are joined with `\n`.
    pub fn parse(content: &str) -> std::result::Result<Self, ConfigSyntaxError> {
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            enabled_indented_mutiline_value: true,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(content, options)?;

        let mut config = Self::default();
        for (section, props) in ini.iter() {
            let target = match section {
                None => {
                    if let Some((key, _)) = props.iter().next() {
                        return Err(ConfigSyntaxError::MissingSectionHeader {
                            key: key.to_string(),
                        });
                    }
                    continue;
                }
                Some(DEFAULT_SECTION) => &mut config.defaults,
                Some(name) => config.sections.entry(name.to_string()).or_default(),
            };
            for (key, value) in props.iter() {
                target.insert(normalize_key(key), normalize_value(value));
            }
        }
        Ok(config)
    }

    /// Looks up `key` under `section`. Keys match case-insensitively and fall
    /// back to `[DEFAULT]`, but only when `section` itself exists.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        let key = normalize_key(key);
        let own = if section == DEFAULT_SECTION {
            None
        } else {
            Some(self.sections.get(section)?)
        };
        own.and_then(|opts| opts.get(&key))
            .or_else(|| self.defaults.get(&key))
            .map(String::as_str)
    }

    /// Looks up `key` under `section`, falling back to `default` when either
    /// the section or the key is absent. A present but empty value is returned as-is.
    ///
    /// 查找 `section` 下的 `key`，当节或键不存在时回退到 `default`。
    /// 存在但为空的值按原样返回。
    pub fn get_or<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.get(section, key).unwrap_or(default)
    }

    /// The tag expression handed to the test runner.
    pub fn tags(&self) -> &str {
        self.get_or(GENERAL_SECTION, TAGS_KEY, DEFAULT_TAGS)
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Trims every line of a possibly multi-line value and drops trailing blank lines.
fn normalize_value(value: &str) -> String {
    value
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

/// Reads and parses the configuration file at `path`.
///
/// A file that exists but cannot be read (a directory, no permission) is
/// skipped with a warning and yields an empty config, so every lookup uses
/// its default.
///
/// # Errors
/// * `ConfigurationNotFound` if the file does not exist
/// * `ConfigurationParse` if it is not valid UTF-8 or not valid ini
pub fn load_test_config(path: &Path) -> Result<TestConfig> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(RunnerError::ConfigurationNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            warn!(
                "Could not read configuration file {}, using defaults: {}",
                path.display(),
                e
            );
            return Ok(TestConfig::default());
        }
    };

    let parse_error = |source| RunnerError::ConfigurationParse {
        path: path.to_path_buf(),
        source,
    };
    let content = String::from_utf8(bytes).map_err(|_| parse_error(ConfigSyntaxError::NotUtf8))?;
    TestConfig::parse(&content).map_err(parse_error)
}
