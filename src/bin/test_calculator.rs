// src/bin/test_calculator.rs
use bank_certificates_backend::models::{
    Certificate, GraduatedRates, PayoutCadence, ReturnType,
};
use bank_certificates_backend::services::calculator::calculate_profit;

fn main() {
    let fixed = Certificate {
        id: "bm-3-year".to_string(),
        name: "شهادة 3 سنوات".to_string(),
        duration: 36,
        interest_rate: 16.5,
        return_type: ReturnType::Fixed,
        graduated_rates: None,
        payout: PayoutCadence::Monthly,
        min_amount: 1500.0,
        description: String::new(),
        features: vec![],
    };

    let result = calculate_profit(&fixed, 1500.0);
    println!("Fixed 16.5% over 36 months on 1500:");
    println!("  total profit:    {:.2}", result.total_profit);
    println!("  monthly payout:  {:.2}", result.periodic_profit);
    println!("  total amount:    {:.2}", result.total_amount);

    let graduated = Certificate {
        id: "nbe-platinum".to_string(),
        name: "الشهادة البلاتينية".to_string(),
        duration: 36,
        interest_rate: 15.0,
        return_type: ReturnType::Graduated,
        graduated_rates: Some(GraduatedRates {
            year1: 15.0,
            year2: 16.0,
            year3: 17.0,
        }),
        payout: PayoutCadence::Annual,
        min_amount: 1000.0,
        description: String::new(),
        features: vec![],
    };

    let result = calculate_profit(&graduated, 1000.0);
    println!("Graduated 15/16/17% over 36 months on 1000:");
    println!("  total profit:    {:.2}", result.total_profit);
    println!("  annual payout:   {:.2}", result.periodic_profit);
    println!("  total amount:    {:.2}", result.total_amount);
    if let Some(breakdown) = result.yearly_breakdown {
        println!("  year 1 profit:   {:.2}", breakdown.year1.yearly_profit);
        println!("  year 2 profit:   {:.2}", breakdown.year2.yearly_profit);
        println!("  year 3 profit:   {:.2}", breakdown.year3.yearly_profit);
    }
}
