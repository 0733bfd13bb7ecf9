// src/bin/init_data.rs
use anyhow::bail;
use bank_certificates_backend::models::{
    Bank, BankData, Certificate, GraduatedRates, PayoutCadence, ReturnType,
};
use dotenv::dotenv;
use std::env;
use std::path::Path;

fn seed_catalog() -> BankData {
    BankData {
        banks: vec![
            Bank {
                id: "banque-misr".to_string(),
                name: "بنك مصر".to_string(),
                logo: "misr.png".to_string(),
                certificates: vec![
                    Certificate {
                        id: "bm-3-year".to_string(),
                        name: "شهادة 3 سنوات".to_string(),
                        duration: 36,
                        interest_rate: 16.5,
                        return_type: ReturnType::Fixed,
                        graduated_rates: None,
                        payout: PayoutCadence::Monthly,
                        min_amount: 1500.0,
                        description: "شهادة ادخارية لمدة 3 سنوات بسعر فائدة 16.5% سنوياً"
                            .to_string(),
                        features: vec![
                            "فائدة شهرية".to_string(),
                            "قابلة للتجديد".to_string(),
                            "ضد التضخم".to_string(),
                        ],
                    },
                    Certificate {
                        id: "bm-5-year".to_string(),
                        name: "شهادة 5 سنوات".to_string(),
                        duration: 60,
                        interest_rate: 17.5,
                        return_type: ReturnType::Fixed,
                        graduated_rates: None,
                        payout: PayoutCadence::Quarterly,
                        min_amount: 1500.0,
                        description: "شهادة ادخارية لمدة 5 سنوات بسعر فائدة 17.5% سنوياً"
                            .to_string(),
                        features: vec![
                            "فائدة ربع سنوية".to_string(),
                            "أعلى سعر فائدة".to_string(),
                            "مضمونة".to_string(),
                        ],
                    },
                ],
            },
            Bank {
                id: "national-bank-of-egypt".to_string(),
                name: "البنك الأهلي المصري".to_string(),
                logo: "elahly.png".to_string(),
                certificates: vec![
                    Certificate {
                        id: "nbe-3-year".to_string(),
                        name: "شهادة الأمل 3 سنوات".to_string(),
                        duration: 36,
                        interest_rate: 16.25,
                        return_type: ReturnType::Fixed,
                        graduated_rates: None,
                        payout: PayoutCadence::Monthly,
                        min_amount: 1000.0,
                        description: "شهادة الأمل لمدة 3 سنوات بسعر فائدة 16.25% سنوياً"
                            .to_string(),
                        features: vec![
                            "فائدة شهرية".to_string(),
                            "تجديد تلقائي".to_string(),
                            "مرونة في السحب".to_string(),
                        ],
                    },
                    Certificate {
                        id: "nbe-platinum".to_string(),
                        name: "الشهادة البلاتينية المتدرجة".to_string(),
                        duration: 36,
                        interest_rate: 30.0,
                        return_type: ReturnType::Graduated,
                        graduated_rates: Some(GraduatedRates {
                            year1: 30.0,
                            year2: 25.0,
                            year3: 20.0,
                        }),
                        payout: PayoutCadence::Monthly,
                        min_amount: 1000.0,
                        description: "شهادة بلاتينية بعائد متدرج 30% ثم 25% ثم 20% سنوياً"
                            .to_string(),
                        features: vec![
                            "عائد متدرج".to_string(),
                            "فائدة شهرية".to_string(),
                        ],
                    },
                ],
            },
        ],
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let path =
        env::var("DATA_FILE").unwrap_or_else(|_| "data/bank-certificates.json".to_string());
    let force = env::args().any(|arg| arg == "--force");

    if Path::new(&path).exists() && !force {
        bail!("{} already exists, pass --force to overwrite", path);
    }

    let data = seed_catalog();
    if let Some(parent) = Path::new(&path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(&path, serde_json::to_string_pretty(&data)?).await?;

    println!("Seeded {} with {} banks", path, data.banks.len());
    Ok(())
}
