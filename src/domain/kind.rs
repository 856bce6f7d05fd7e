//! XDG ディレクトリ種別（data / config）と探索パスの解決
//!
//! 種別ごとに「ユーザー用の上書き変数」「システム用の複数パス変数」と
//! それぞれのデフォルトを持ち、[`XdgDirectory::resolve`] が優先順位どおりの
//! [`SearchPath`] を組み立てる。

use std::path::PathBuf;

use crate::domain::SearchPath;
use crate::ports::outbound::EnvLookup;

const HOME_ENV_VAR: &str = "HOME";

/// XDG ディレクトリ種別（プロセス全体で不変の定数データ）
///
/// 公開されるのは [`XdgDirectory::DATA`] と [`XdgDirectory::CONFIG`] の
/// 2 つだけで、外からは構築できない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XdgDirectory {
    user_env_var: &'static str,
    system_env_var: &'static str,
    user_default: &'static str,
    system_default: &'static str,
}

impl XdgDirectory {
    /// データファイル用（XDG_DATA_HOME / XDG_DATA_DIRS）
    pub const DATA: XdgDirectory = XdgDirectory {
        user_env_var: "XDG_DATA_HOME",
        system_env_var: "XDG_DATA_DIRS",
        user_default: "$HOME/.local/share",
        system_default: "/usr/local/share:/usr/share",
    };

    /// 設定ファイル用（XDG_CONFIG_HOME / XDG_CONFIG_DIRS）
    pub const CONFIG: XdgDirectory = XdgDirectory {
        user_env_var: "XDG_CONFIG_HOME",
        system_env_var: "XDG_CONFIG_DIRS",
        user_default: "$HOME/.config",
        system_default: "/etc/xdg",
    };

    /// 環境変数から探索パスを組み立てる
    ///
    /// 優先順位:
    /// 1. ユーザー変数（XDG_*_HOME）が非空なら、その値を展開せずそのまま先頭に置く
    /// 2. 未設定なら、HOME が非空のときだけユーザーデフォルトを展開して先頭に置く
    ///    （デフォルトテンプレートが参照する変数は HOME のみとみなす。
    ///    HOME が空ならユーザー層は 0 件）
    /// 3. システム変数（XDG_*_DIRS）が非空ならその値、未設定ならシステムデフォルト
    ///    を `:` で分割し、元の並び順のまま後ろに続ける
    ///
    /// 重複や空文字列の候補は取り除かない。同じ環境なら常に同じ結果を返す。
    pub fn resolve(&self, env: &dyn EnvLookup) -> SearchPath {
        let mut paths: Vec<PathBuf> = Vec::with_capacity(3);

        let user_dir = env.var(self.user_env_var);
        if !user_dir.is_empty() {
            paths.push(PathBuf::from(user_dir));
        } else {
            let home = env.var(HOME_ENV_VAR);
            if !home.is_empty() {
                paths.push(PathBuf::from(expand(self.user_default, env)));
            }
        }

        let system_dirs = env.var(self.system_env_var);
        let system_dirs = if system_dirs.is_empty() {
            expand(self.system_default, env)
        } else {
            system_dirs
        };
        paths.extend(system_dirs.split(':').map(PathBuf::from));

        SearchPath::new(paths)
    }
}

/// `$VAR` / `${VAR}` をルックアップの値で置き換える（シェル風の最小実装）
///
/// 変数名は ASCII 英数字とアンダースコア。単独の `$` や閉じられない `${` は
/// そのまま文字として残る。
fn expand(template: &str, env: &dyn EnvLookup) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) => {
                    out.push_str(&env.var(&braced[..end]));
                    rest = &braced[end + 1..];
                }
                None => {
                    out.push('$');
                    rest = after;
                }
            }
            continue;
        }

        let len = after
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        if len == 0 {
            out.push('$');
            rest = after;
        } else {
            out.push_str(&env.var(&after[..len]));
            rest = &after[len..];
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MockEnv(HashMap<&'static str, &'static str>);

    impl MockEnv {
        fn new(vars: &[(&'static str, &'static str)]) -> Self {
            Self(vars.iter().copied().collect())
        }
    }

    impl EnvLookup for MockEnv {
        fn var(&self, name: &str) -> String {
            self.0.get(name).copied().unwrap_or_default().to_string()
        }
    }

    fn expected(paths: &[&str]) -> SearchPath {
        SearchPath::new(paths.iter().map(PathBuf::from).collect())
    }

    #[test]
    fn test_resolve_data_precedence_table() {
        // (home, data_home, data_dirs, expected)
        let cases: &[(&str, &str, &str, &[&str])] = &[
            ("", "", "", &["/usr/local/share", "/usr/share"]),
            (
                "/tmp/magic",
                "",
                "",
                &["/tmp/magic/.local/share", "/usr/local/share", "/usr/share"],
            ),
            (
                "",
                "/tmp/magic",
                "",
                &["/tmp/magic", "/usr/local/share", "/usr/share"],
            ),
            ("", "", "/tmp/magic", &["/tmp/magic"]),
            (
                "/tmp/home",
                "",
                "/tmp/magic",
                &["/tmp/home/.local/share", "/tmp/magic"],
            ),
            (
                "/tmp/home",
                "/tmp/dataHome",
                "",
                &["/tmp/dataHome", "/usr/local/share", "/usr/share"],
            ),
            (
                "",
                "/tmp/dataHome",
                "/tmp/dataDir",
                &["/tmp/dataHome", "/tmp/dataDir"],
            ),
            (
                "",
                "",
                "/tmp/dataDir1:/tmp/dataDir2",
                &["/tmp/dataDir1", "/tmp/dataDir2"],
            ),
        ];

        for (home, data_home, data_dirs, paths) in cases {
            let mut vars = Vec::new();
            if !home.is_empty() {
                vars.push(("HOME", *home));
            }
            if !data_home.is_empty() {
                vars.push(("XDG_DATA_HOME", *data_home));
            }
            if !data_dirs.is_empty() {
                vars.push(("XDG_DATA_DIRS", *data_dirs));
            }
            let resolved = XdgDirectory::DATA.resolve(&MockEnv::new(&vars));
            assert_eq!(
                resolved,
                expected(paths),
                "home={home:?} data_home={data_home:?} data_dirs={data_dirs:?}"
            );
        }
    }

    #[test]
    fn test_resolve_config_defaults() {
        let resolved = XdgDirectory::CONFIG.resolve(&MockEnv::new(&[("HOME", "/tmp/home")]));
        assert_eq!(resolved, expected(&["/tmp/home/.config", "/etc/xdg"]));
    }

    #[test]
    fn test_resolve_config_overrides() {
        let env = MockEnv::new(&[
            ("HOME", "/tmp/home"),
            ("XDG_CONFIG_HOME", "/tmp/conf"),
            ("XDG_CONFIG_DIRS", "/a:/b"),
        ]);
        let resolved = XdgDirectory::CONFIG.resolve(&env);
        assert_eq!(resolved, expected(&["/tmp/conf", "/a", "/b"]));
    }

    #[test]
    fn test_resolve_user_override_is_taken_verbatim() {
        // 上書き値の中の $HOME は展開されない
        let env = MockEnv::new(&[("HOME", "/tmp/home"), ("XDG_DATA_HOME", "$HOME/data")]);
        let resolved = XdgDirectory::DATA.resolve(&env);
        assert_eq!(
            resolved,
            expected(&["$HOME/data", "/usr/local/share", "/usr/share"])
        );
    }

    #[test]
    fn test_resolve_preserves_empty_segments() {
        let env = MockEnv::new(&[("XDG_DATA_DIRS", "/a::/b")]);
        let resolved = XdgDirectory::DATA.resolve(&env);
        assert_eq!(resolved, expected(&["/a", "", "/b"]));
    }

    #[test]
    fn test_resolve_empty_system_default_splits_to_single_empty_segment() {
        let kind = XdgDirectory {
            user_env_var: "T_USER",
            system_env_var: "T_SYSTEM",
            user_default: "$HOME/.t",
            system_default: "",
        };
        let resolved = kind.resolve(&MockEnv::new(&[]));
        assert_eq!(resolved, expected(&[""]));
    }

    #[test]
    fn test_resolve_is_pure() {
        let env = MockEnv::new(&[("HOME", "/tmp/home"), ("XDG_DATA_DIRS", "/a:/b")]);
        assert_eq!(
            XdgDirectory::DATA.resolve(&env),
            XdgDirectory::DATA.resolve(&env)
        );
    }

    #[test]
    fn test_expand_substitutes_home() {
        let env = MockEnv::new(&[("HOME", "/tmp/home")]);
        assert_eq!(expand("$HOME/.local/share", &env), "/tmp/home/.local/share");
        assert_eq!(expand("${HOME}/.config", &env), "/tmp/home/.config");
    }

    #[test]
    fn test_expand_unset_var_becomes_empty() {
        let env = MockEnv::new(&[]);
        assert_eq!(expand("$MISSING/share", &env), "/share");
    }

    #[test]
    fn test_expand_leaves_literal_dollars() {
        let env = MockEnv::new(&[("HOME", "/h")]);
        assert_eq!(expand("price$", &env), "price$");
        assert_eq!(expand("a$/b", &env), "a$/b");
        assert_eq!(expand("${HOME", &env), "${HOME");
    }
}
