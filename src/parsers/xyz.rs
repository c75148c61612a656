//! # XYZ 坐标块解析与校验
//!
//! 同一段文本有两条互相独立的处理路径：
//! - `parse_xyz`: 宽松解析，逐行提取原子，格式不对的行直接丢弃，从不报错
//! - `validate_xyz`: 严格校验，任一规则不满足即整体无效，用于控制渲染与导出
//!
//! 两者对同一输入的结论可以不同（例如声明原子数与实际行数不符时，
//! 严格校验失败而宽松解析仍能得到原子），两条路径需分别保留。
//!
//! ## XYZ 格式说明
//! ```text
//! 3                      # 原子数
//! Water                  # 注释/标签
//! O  0.000  0.000  0.117
//! H  0.000  0.757 -0.469
//! H  0.000 -0.757 -0.469
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs`, `viewer/` 使用
//! - 使用 `models/molecule.rs`

use crate::models::Atom;

/// 严格校验失败的原因，按检查顺序排列
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XyzViolation {
    /// 文本为空
    Empty,
    /// 去除首尾空白后不足 3 行
    TooFewLines(usize),
    /// 第一行不是正整数
    InvalidCount(String),
    /// 数据行数与声明原子数不符
    CountMismatch { declared: usize, found: usize },
    /// 数据行不是恰好 4 列（行号从 1 开始）
    WrongColumnCount { line: usize, columns: usize },
    /// 坐标不是有限数值
    InvalidCoordinate { line: usize, token: String },
}

impl std::fmt::Display for XyzViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            XyzViolation::Empty => write!(f, "empty coordinate block"),
            XyzViolation::TooFewLines(n) => write!(f, "expected at least 3 lines, found {}", n),
            XyzViolation::InvalidCount(s) => write!(f, "invalid atom count '{}'", s),
            XyzViolation::CountMismatch { declared, found } => write!(
                f,
                "declared {} atoms but found {} data lines",
                declared, found
            ),
            XyzViolation::WrongColumnCount { line, columns } => {
                write!(f, "line {}: expected 4 columns, found {}", line, columns)
            }
            XyzViolation::InvalidCoordinate { line, token } => {
                write!(f, "line {}: invalid coordinate '{}'", line, token)
            }
        }
    }
}

/// 解析有限浮点数（允许符号与指数形式）
fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 去除整体首尾空白后按行切分
fn split_lines(content: &str) -> Vec<&str> {
    content.trim().split('\n').collect()
}

/// 宽松解析坐标块
///
/// 从第 3 行开始，恰好 4 列且后 3 列为有限数值的行生成一个原子，
/// 其余行被静默跳过。不足 3 行时返回空列表。第一行的原子数仅供参考。
pub fn parse_xyz(content: &str) -> Vec<Atom> {
    let lines = split_lines(content);
    if lines.len() < 3 {
        return Vec::new();
    }

    let mut atoms = Vec::new();
    for line in &lines[2..] {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 4 {
            continue;
        }

        if let (Some(x), Some(y), Some(z)) = (
            parse_finite(parts[1]),
            parse_finite(parts[2]),
            parse_finite(parts[3]),
        ) {
            atoms.push(Atom::new(parts[0], x, y, z));
        }
    }

    atoms
}

/// 读取第二行标签（缺失时为空字符串）
pub fn parse_label(content: &str) -> String {
    split_lines(content)
        .get(1)
        .map(|l| l.trim().to_string())
        .unwrap_or_default()
}

/// 严格校验坐标块，返回第一个不满足的规则
pub fn check_xyz(content: &str) -> Result<(), XyzViolation> {
    if content.trim().is_empty() {
        return Err(XyzViolation::Empty);
    }

    let lines = split_lines(content);
    if lines.len() < 3 {
        return Err(XyzViolation::TooFewLines(lines.len()));
    }

    let count_line = lines[0].trim();
    let declared = count_line
        .split_whitespace()
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .ok_or_else(|| XyzViolation::InvalidCount(count_line.to_string()))?;

    let found = lines.len() - 2;
    if found != declared {
        return Err(XyzViolation::CountMismatch { declared, found });
    }

    for (offset, line) in lines[2..].iter().enumerate() {
        let line_no = offset + 3;
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 4 {
            return Err(XyzViolation::WrongColumnCount {
                line: line_no,
                columns: parts.len(),
            });
        }

        // 元素符号不做化学合法性检查
        for token in &parts[1..] {
            if parse_finite(token).is_none() {
                return Err(XyzViolation::InvalidCoordinate {
                    line: line_no,
                    token: token.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// 严格校验，全部通过才为 true
pub fn validate_xyz(content: &str) -> bool {
    check_xyz(content).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const H2: &str = "2\nTest\nH 0 0 0\nH 0 0 0.74\n";

    #[test]
    fn test_parse_xyz_hydrogen() {
        let atoms = parse_xyz(H2);
        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms[1].element, "H");
        assert!((atoms[1].z - 0.74).abs() < 1e-12);
        assert!(validate_xyz(H2));
    }

    #[test]
    fn test_parse_xyz_degenerate() {
        assert!(parse_xyz("").is_empty());
        assert!(parse_xyz("1\nonly label").is_empty());
        assert!(parse_xyz("\n\n  \n").is_empty());
    }

    #[test]
    fn test_parse_xyz_skips_malformed_lines() {
        let content = "4\nmixed\nC 0 0 0\nC 1.5 0 0 extra\nN abc 0 0\nO -1.2e0 +0.5 1E-1\n";
        let atoms = parse_xyz(content);

        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms[0].element, "C");
        assert_eq!(atoms[1].element, "O");
        assert!((atoms[1].x + 1.2).abs() < 1e-12);
        assert!((atoms[1].z - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_parse_xyz_rejects_non_finite() {
        let content = "2\nx\nC inf 0 0\nC NaN 0 0\n";
        assert!(parse_xyz(content).is_empty());
        assert!(!validate_xyz(content));
    }

    #[test]
    fn test_parse_xyz_tabs_and_crlf() {
        let content = "2\r\nlabel\r\nC\t0.0\t0.0\t0.0\r\nH   1.09  0.0   0.0\r\n";
        assert_eq!(parse_xyz(content).len(), 2);
        assert!(validate_xyz(content));
        assert_eq!(parse_label(content), "label");
    }

    #[test]
    fn test_lenient_and_strict_diverge() {
        // 声明 3 个原子但只有 2 行数据
        let content = "3\nTest\nH 0 0 0\nH 0 0 0.74\n";
        assert_eq!(
            check_xyz(content),
            Err(XyzViolation::CountMismatch {
                declared: 3,
                found: 2
            })
        );
        assert_eq!(parse_xyz(content).len(), 2);
    }

    #[test]
    fn test_check_xyz_order() {
        assert_eq!(check_xyz("   "), Err(XyzViolation::Empty));
        assert_eq!(check_xyz("1\nx"), Err(XyzViolation::TooFewLines(2)));
        assert_eq!(
            check_xyz("zero\nx\nC 0 0 0"),
            Err(XyzViolation::InvalidCount("zero".to_string()))
        );
        assert_eq!(
            check_xyz("0\nx\nC 0 0 0"),
            Err(XyzViolation::InvalidCount("0".to_string()))
        );
        assert_eq!(
            check_xyz("-1\nx\nC 0 0 0"),
            Err(XyzViolation::InvalidCount("-1".to_string()))
        );
        assert_eq!(
            check_xyz("1\nx\nC 0 0"),
            Err(XyzViolation::WrongColumnCount {
                line: 3,
                columns: 3
            })
        );
        assert_eq!(
            check_xyz("1\nx\nC 0 y 0"),
            Err(XyzViolation::InvalidCoordinate {
                line: 3,
                token: "y".to_string()
            })
        );
    }

    #[test]
    fn test_count_line_must_be_whole_integer() {
        assert_eq!(
            check_xyz("1.0\nx\nC 0 0 0"),
            Err(XyzViolation::InvalidCount("1.0".to_string()))
        );
        assert_eq!(
            check_xyz("1abc\nx\nC 0 0 0"),
            Err(XyzViolation::InvalidCount("1abc".to_string()))
        );
        // 原子数后可跟其他字段
        assert!(validate_xyz("1 atoms\nx\nC 0 0 0"));
    }

    #[test]
    fn test_validator_accepts_unknown_element() {
        assert!(validate_xyz("1\nmystery\nXx 1.0 2.0 3.0"));
    }

    #[test]
    fn test_valid_count_matches_parsed() {
        let content = "3\nWater\nO 0.000 0.000 0.117\nH 0.000 0.757 -0.469\nH 0.000 -0.757 -0.469";
        assert!(validate_xyz(content));
        assert_eq!(parse_xyz(content).len(), 3);
    }
}
