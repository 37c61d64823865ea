//! Settlement Context - Value Objects

use std::str::FromStr;

use super::SettlementError;

/// 固定筛选的州
pub const SOMOGY: &str = "Somogy";

/// 定居点唯一标识（数据库自增主键）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SettlementId(i64);

impl SettlementId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for SettlementId {
    type Err = SettlementError;

    /// 路径参数解析：必须表示一个整数，否则在访问数据库之前拒绝
    ///
    /// 整数值的小数 / 指数写法（`1.0`、`1e3`）同样接受
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.parse::<i64>() {
            return Ok(Self(id));
        }

        match s.parse::<f64>() {
            Ok(v) if v.is_finite()
                && v.fract() == 0.0
                && v >= i64::MIN as f64
                && v < i64::MAX as f64 =>
            {
                Ok(Self(v as i64))
            }
            _ => Err(SettlementError::InvalidId(s.to_string())),
        }
    }
}

impl std::fmt::Display for SettlementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 定居点名称（nev）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementName(String);

impl SettlementName {
    pub fn new(name: impl Into<String>) -> Result<Self, SettlementError> {
        let name = name.into();
        if name.is_empty() {
            return Err(SettlementError::MissingField);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for SettlementName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 州名称（varmegye）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountyName(String);

impl CountyName {
    pub fn new(county: impl Into<String>) -> Result<Self, SettlementError> {
        let county = county.into();
        if county.is_empty() {
            return Err(SettlementError::MissingField);
        }
        Ok(Self(county))
    }

    pub fn somogy() -> Self {
        Self(SOMOGY.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CountyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 创建 / 全量更新时提交的字段
///
/// 不变量:
/// - name 和 county 均非空，任一缺失即整体拒绝
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementDraft {
    pub name: SettlementName,
    pub county: CountyName,
}

impl SettlementDraft {
    pub fn new(name: Option<String>, county: Option<String>) -> Result<Self, SettlementError> {
        let name = SettlementName::new(name.unwrap_or_default())?;
        let county = CountyName::new(county.unwrap_or_default())?;
        Ok(Self { name, county })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!("42".parse::<SettlementId>(), Ok(SettlementId::new(42)));
        assert_eq!("-3".parse::<SettlementId>(), Ok(SettlementId::new(-3)));
        assert!("abc".parse::<SettlementId>().is_err());
        assert!("1.5".parse::<SettlementId>().is_err());
        assert!("".parse::<SettlementId>().is_err());
    }

    #[test]
    fn test_parse_integral_float_forms() {
        assert_eq!("1.0".parse::<SettlementId>(), Ok(SettlementId::new(1)));
        assert_eq!("1e3".parse::<SettlementId>(), Ok(SettlementId::new(1000)));
        assert_eq!("-2.000".parse::<SettlementId>(), Ok(SettlementId::new(-2)));
        assert!("1e-1".parse::<SettlementId>().is_err());
        assert!("inf".parse::<SettlementId>().is_err());
        assert!("NaN".parse::<SettlementId>().is_err());
        assert!("1e30".parse::<SettlementId>().is_err());
        assert_eq!(
            "somogy".parse::<SettlementId>(),
            Err(SettlementError::InvalidId("somogy".to_string()))
        );
    }

    #[test]
    fn test_draft_requires_both_fields() {
        assert!(SettlementDraft::new(Some("Pécs".into()), Some("Baranya".into())).is_ok());
        assert_eq!(
            SettlementDraft::new(Some("Pécs".into()), None),
            Err(SettlementError::MissingField)
        );
        assert_eq!(
            SettlementDraft::new(Some(String::new()), Some("Baranya".into())),
            Err(SettlementError::MissingField)
        );
        assert_eq!(SettlementDraft::new(None, None), Err(SettlementError::MissingField));
    }

    #[test]
    fn test_whitespace_name_is_accepted() {
        // 只拒绝空串，不做 trim
        let draft = SettlementDraft::new(Some(" ".into()), Some("Tolna".into())).unwrap();
        assert_eq!(draft.name.as_str(), " ");
    }
}
