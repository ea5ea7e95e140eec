use crate::core::ledger::NormPolicy;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Expected working minutes per weekday, overridable per installation.
/// The defaults encode the stock schedule: 9h Monday–Thursday, 4h Friday,
/// free weekends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekNorm {
    #[serde(default = "norm_full_day")]
    pub mon: i64,
    #[serde(default = "norm_full_day")]
    pub tue: i64,
    #[serde(default = "norm_full_day")]
    pub wed: i64,
    #[serde(default = "norm_full_day")]
    pub thu: i64,
    #[serde(default = "norm_short_day")]
    pub fri: i64,
    #[serde(default)]
    pub sat: i64,
    #[serde(default)]
    pub sun: i64,
}

fn norm_full_day() -> i64 {
    540
}
fn norm_short_day() -> i64 {
    240
}

impl Default for WeekNorm {
    fn default() -> Self {
        Self {
            mon: norm_full_day(),
            tue: norm_full_day(),
            wed: norm_full_day(),
            thu: norm_full_day(),
            fri: norm_short_day(),
            sat: 0,
            sun: 0,
        }
    }
}

impl WeekNorm {
    pub fn to_policy(&self) -> NormPolicy {
        NormPolicy::new([
            self.mon, self.tue, self.wed, self.thu, self.fri, self.sat, self.sun,
        ])
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub week_norm: WeekNorm,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            week_norm: WeekNorm::default(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("workledger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".workledger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("workledger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("workledger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    pub fn norm_policy(&self) -> NormPolicy {
        self.week_norm.to_policy()
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).expect("serialize default config");
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
