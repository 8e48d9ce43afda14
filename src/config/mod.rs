use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Hubs the attendance aggregator accepts. Matching is tolerant of
    /// case, spacing and punctuation.
    #[serde(default = "default_allowed_hubs")]
    pub allowed_hubs: Vec<String>,
    /// Stores the order report covers, in display order.
    #[serde(default = "default_report_stores")]
    pub report_stores: Vec<String>,
}

fn default_allowed_hubs() -> Vec<String> {
    [
        "Kalyan Nagar_mnow",
        "Basaweshwar Nagar Mnow",
        "Jakkur_mnow",
        "Begur Mnow",
        "Thyagaraja Nagar_mnow",
        "Brookfield_mnow",
        "JP nagar Mnow",
        "Sarjapur road Mnow",
        "Manikonda_mnow",
        "Gachibowli_mnow",
        "Attapur_mnow",
        "Nizampet_mnow",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_report_stores() -> Vec<String> {
    [
        "Kalyan Nagar_mnow",
        "Basaveshwar Nagar_mnow",
        "Jakkur_mnow",
        "Begur_mnow",
        "Thyagaraja Nagar_mnow",
        "Brookfield_mnow",
        "JP nagar_mnow",
        "Sarjapur Road_mnow",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            allowed_hubs: default_allowed_hubs(),
            report_stores: default_report_stores(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hubdeck")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".hubdeck")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hubdeck.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("hubdeck.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Self::default())
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<()> {
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

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }

    /// Verify the configured paths exist and report what is missing.
    pub fn check(&self) -> bool {
        let mut ok = true;

        if !Self::config_file().exists() {
            crate::ui::messages::warning(format!(
                "Config file not found: {:?}",
                Self::config_file()
            ));
            ok = false;
        }
        if !std::path::Path::new(&self.database).exists() {
            crate::ui::messages::warning(format!("Database not found: {}", self.database));
            ok = false;
        }

        ok
    }
}
