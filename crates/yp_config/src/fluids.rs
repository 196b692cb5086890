// crates/yp_config/src/fluids.rs

//! 流体预设表
//!
//! 名称 → {ρ, μ} 的只读映射，供展示层预填流动参数。计算核心从不读取此表。
//!
//! 自定义表的 JSON 格式：
//!
//! ```json
//! {
//!   "default": "oil",
//!   "fluids": [
//!     { "key": "oil", "name": "机油 (40°C)", "rho": 870.0, "mu": 0.05 }
//!   ]
//! }
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// 内置默认预设键
pub const DEFAULT_FLUID: &str = "air-20c";

/// 单个流体预设
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluidPreset {
    /// 查找键
    pub key: String,
    /// 显示名称
    pub name: String,
    /// 密度 ρ [kg/m³]
    pub rho: f64,
    /// 动力粘度 μ [Pa·s]
    pub mu: f64,
}

impl FluidPreset {
    /// 创建预设
    pub fn new(key: impl Into<String>, name: impl Into<String>, rho: f64, mu: f64) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            rho,
            mu,
        }
    }

    /// 运动粘度 ν = μ/ρ [m²/s]
    pub fn nu(&self) -> f64 {
        self.mu / self.rho
    }

    fn matches(&self, query: &str) -> bool {
        self.key.eq_ignore_ascii_case(query) || self.name == query
    }
}

/// 预设表文件格式
#[derive(Debug, Deserialize)]
struct FluidTableFile {
    #[serde(default)]
    default: Option<String>,
    fluids: Vec<FluidPreset>,
}

/// 流体预设表
///
/// 构造后不可修改；构造时保证键唯一、物性为正、默认项存在。
#[derive(Debug, Clone, PartialEq)]
pub struct FluidTable {
    fluids: Vec<FluidPreset>,
    default_index: usize,
}

impl Default for FluidTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FluidTable {
    /// 内置预设：20°C/25°C 的空气与水
    pub fn builtin() -> Self {
        Self {
            fluids: vec![
                FluidPreset::new("air-25c", "空气 (25°C)", 1.184, 1.849e-5),
                FluidPreset::new("air-20c", "空气 (20°C)", 1.204, 1.810e-5),
                FluidPreset::new("water-20c", "水 (20°C)", 998.2, 1.002e-3),
                FluidPreset::new("water-25c", "水 (25°C)", 997.0, 0.894e-3),
            ],
            default_index: 1,
        }
    }

    /// 由预设列表构造并验证
    ///
    /// `default` 为空时使用第一项。
    pub fn new(fluids: Vec<FluidPreset>, default: Option<&str>) -> Result<Self, ConfigError> {
        if fluids.is_empty() {
            return Err(ConfigError::Missing("fluids".to_string()));
        }

        let mut seen = HashSet::new();
        for (i, f) in fluids.iter().enumerate() {
            if !seen.insert(f.key.to_ascii_lowercase()) {
                return Err(ConfigError::DuplicateFluid(f.key.clone()));
            }
            for (field, value) in [("rho", f.rho), ("mu", f.mu)] {
                if !(value.is_finite() && value > 0.0) {
                    return Err(ConfigError::InvalidValue {
                        key: format!("fluids[{i}].{field}"),
                        value: value.to_string(),
                        reason: "物性必须为正数".to_string(),
                    });
                }
            }
        }

        let default_index = match default {
            Some(name) => fluids
                .iter()
                .position(|f| f.matches(name))
                .ok_or_else(|| ConfigError::UnknownFluid(name.to_string()))?,
            None => 0,
        };

        Ok(Self {
            fluids,
            default_index,
        })
    }

    /// 从 JSON 文本加载
    ///
    /// 语法错误返回 [`ConfigError::Parse`]，内容错误保留 [`FluidTable::new`] 的具体变体。
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let file: FluidTableFile = serde_json::from_str(content)?;
        Self::new(file.fluids, file.default.as_deref())
    }

    /// 从文件加载
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let table = Self::from_json_str(&content)?;
        log::debug!(
            "已加载流体预设表 {}: {} 项",
            path.as_ref().display(),
            table.len()
        );
        Ok(table)
    }

    /// 按键（忽略大小写）或显示名称查找
    pub fn get(&self, query: &str) -> Option<&FluidPreset> {
        let query = query.trim();
        self.fluids.iter().find(|f| f.matches(query))
    }

    /// 查找，不存在时返回错误
    pub fn lookup(&self, query: &str) -> Result<&FluidPreset, ConfigError> {
        self.get(query)
            .ok_or_else(|| ConfigError::UnknownFluid(query.to_string()))
    }

    /// 默认预设
    pub fn default_preset(&self) -> &FluidPreset {
        &self.fluids[self.default_index]
    }

    /// 遍历全部预设
    pub fn iter(&self) -> impl Iterator<Item = &FluidPreset> {
        self.fluids.iter()
    }

    /// 预设数量
    pub fn len(&self) -> usize {
        self.fluids.len()
    }

    /// 是否为空（验证后的表总是非空）
    pub fn is_empty(&self) -> bool {
        self.fluids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_values() {
        let table = FluidTable::builtin();
        assert_eq!(table.len(), 4);
        let air = table.default_preset();
        assert_eq!(air.key, DEFAULT_FLUID);
        assert_eq!(air.rho, 1.204);
        assert_eq!(air.mu, 1.810e-5);
        assert_eq!(table.lookup("water-20c").unwrap().rho, 998.2);
        assert_eq!(table.lookup("water-25c").unwrap().mu, 0.894e-3);
    }

    #[test]
    fn test_lookup_by_key_or_name() {
        let table = FluidTable::builtin();
        assert_eq!(table.get("AIR-25C").unwrap().rho, 1.184);
        assert_eq!(table.get("水 (20°C)").unwrap().key, "water-20c");
        assert!(matches!(
            table.lookup("mercury"),
            Err(ConfigError::UnknownFluid(_))
        ));
    }

    #[test]
    fn test_custom_table_from_json() {
        let json = r#"{
            "default": "oil",
            "fluids": [
                { "key": "glycerol", "name": "甘油", "rho": 1260.0, "mu": 1.412 },
                { "key": "oil", "name": "机油 (40°C)", "rho": 870.0, "mu": 0.05 }
            ]
        }"#;
        let table = FluidTable::from_json_str(json).unwrap();
        assert_eq!(table.default_preset().key, "oil");
        assert!((table.get("glycerol").unwrap().nu() - 1.412 / 1260.0).abs() < 1e-15);
    }

    #[test]
    fn test_default_falls_back_to_first() {
        let json = r#"{ "fluids": [ { "key": "a", "name": "A", "rho": 1.0, "mu": 1.0 } ] }"#;
        let table = FluidTable::from_json_str(json).unwrap();
        assert_eq!(table.default_preset().key, "a");
    }

    #[test]
    fn test_rejects_invalid_tables() {
        let dup = vec![
            FluidPreset::new("a", "A", 1.0, 1.0),
            FluidPreset::new("A", "A2", 1.0, 1.0),
        ];
        assert!(matches!(
            FluidTable::new(dup, None),
            Err(ConfigError::DuplicateFluid(_))
        ));

        let bad = vec![FluidPreset::new("a", "A", 1.0, 0.0)];
        assert!(matches!(
            FluidTable::new(bad, None),
            Err(ConfigError::InvalidValue { .. })
        ));

        assert!(matches!(
            FluidTable::new(Vec::new(), None),
            Err(ConfigError::Missing(_))
        ));

        let ok = vec![FluidPreset::new("a", "A", 1.0, 1.0)];
        assert!(matches!(
            FluidTable::new(ok, Some("b")),
            Err(ConfigError::UnknownFluid(_))
        ));
    }

    #[test]
    fn test_json_content_errors_keep_their_variant() {
        let dup = r#"{ "fluids": [
            { "key": "oil", "name": "A", "rho": 870.0, "mu": 0.05 },
            { "key": "OIL", "name": "B", "rho": 870.0, "mu": 0.05 }
        ] }"#;
        assert!(matches!(
            FluidTable::from_json_str(dup),
            Err(ConfigError::DuplicateFluid(key)) if key == "OIL"
        ));

        let bad = r#"{ "fluids": [ { "key": "a", "name": "A", "rho": -1.0, "mu": 1.0 } ] }"#;
        assert!(matches!(
            FluidTable::from_json_str(bad),
            Err(ConfigError::InvalidValue { key, .. }) if key == "fluids[0].rho"
        ));

        let unknown = r#"{
            "default": "b",
            "fluids": [ { "key": "a", "name": "A", "rho": 1.0, "mu": 1.0 } ]
        }"#;
        assert!(matches!(
            FluidTable::from_json_str(unknown),
            Err(ConfigError::UnknownFluid(name)) if name == "b"
        ));

        assert!(matches!(
            FluidTable::from_json_str(r#"{ "fluids": "none" }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fluids.json");
        std::fs::write(
            &path,
            r#"{ "fluids": [ { "key": "he", "name": "氦", "rho": 0.1786, "mu": 1.96e-5 } ] }"#,
        )
        .unwrap();
        let table = FluidTable::from_file(&path).unwrap();
        assert_eq!(table.len(), 1);

        let dup = dir.path().join("dup.json");
        std::fs::write(
            &dup,
            r#"{ "fluids": [
                { "key": "he", "name": "氦", "rho": 0.1786, "mu": 1.96e-5 },
                { "key": "he", "name": "氦 2", "rho": 0.1786, "mu": 1.96e-5 }
            ] }"#,
        )
        .unwrap();
        assert!(matches!(
            FluidTable::from_file(&dup),
            Err(ConfigError::DuplicateFluid(_))
        ));

        let missing = FluidTable::from_file(dir.path().join("nope.json"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
