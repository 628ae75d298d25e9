use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::finance::{FinancingModel, LcoeInput, ValuationPoint};

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 기본 사업 입력값. 별도 입력이 없을 때 계산에 쓰인다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// 건설비(OCC)
    pub occ: f64,
    /// 건설 기간 [년]
    pub construction_years: u32,
    /// 운전 기간 [년]
    pub useful_life: u32,
    /// 할인율 (소수)
    pub discount_rate: f64,
    /// 건설 중 이자율 (소수)
    pub interest_rate: f64,
    /// 연간 발전량
    pub energy_per_year: f64,
    /// IDC 적립 방식: "standard" 또는 "rab"
    pub model: FinancingModel,
    /// 할인 기준 시점: "soc" 또는 "cod"
    pub valuation_point: ValuationPoint,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            occ: 1_000_000_000.0,
            construction_years: 5,
            useful_life: 40,
            discount_rate: 0.07,
            interest_rate: 0.05,
            energy_per_year: 8_000_000.0,
            model: FinancingModel::Standard,
            valuation_point: ValuationPoint::StartOfConstruction,
        }
    }
}

impl ProjectConfig {
    /// 계산 입력으로 변환한다.
    pub fn to_input(&self) -> LcoeInput {
        LcoeInput {
            occ: self.occ,
            construction_years: self.construction_years,
            useful_life: self.useful_life,
            discount_rate: self.discount_rate,
            interest_rate: self.interest_rate,
            energy_per_year: self.energy_per_year,
            model: self.model,
            valuation_point: self.valuation_point,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류 (알 수 없는 모델/기준 시점 포함)
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!("설정 파일을 읽었습니다: {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        warn!("설정 파일이 없어 기본값으로 생성했습니다: {}", path.display());
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_creates_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let cfg = load_or_default(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.is_file());
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let mut cfg = Config::default();
        cfg.project.model = FinancingModel::Rab;
        cfg.project.valuation_point = ValuationPoint::CommercialOperationDate;
        cfg.save(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("model = \"rab\""));
        assert!(content.contains("valuation_point = \"cod\""));
        assert_eq!(load_or_default(&path).unwrap(), cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[project]\nuseful_life = 25\n").unwrap();
        let cfg = load_or_default(&path).unwrap();
        assert_eq!(cfg.project.useful_life, 25);
        assert_eq!(cfg.project.construction_years, 5);
    }

    #[test]
    fn unknown_model_fails_to_parse() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[project]\nmodel = \"bogus\"\n").unwrap();
        assert!(matches!(load_or_default(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_valuation_point_fails_to_parse() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[project]\nvaluation_point = \"bogus\"\n").unwrap();
        assert!(matches!(load_or_default(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn default_project_is_demonstration_sample() {
        let input = ProjectConfig::default().to_input();
        assert_eq!(input.occ, 1_000_000_000.0);
        assert_eq!(input.construction_years, 5);
        assert_eq!(input.useful_life, 40);
        assert_eq!(input.model, FinancingModel::Standard);
        assert_eq!(input.valuation_point, ValuationPoint::StartOfConstruction);
    }
}
