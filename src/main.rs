use chrono::{Duration, Utc};
use fxsignal::config::{Config, InstrumentConfig};
use fxsignal::logging;
use fxsignal::models::{Observation, Prediction, RiskSettings, TradeRecommendation};
use fxsignal::signals::{Aggregator, SignalEngine, StopLossTakeProfit};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env()?;
    let symbol = "EUR/USD";
    let instrument = config.instrument(symbol);
    let mut engine = SignalEngine::new(config.engine.clone());

    let start = Utc::now();
    let mut latest = None;
    for i in 0..15 {
        let price = 1.1000 + i as f64 * 0.0005;
        let observation = Observation::new(price, start + Duration::seconds(i * 5));
        latest = Some(engine.update(symbol, observation)?);
    }

    let prediction = latest.ok_or("no prediction produced")?;
    print_prediction(&prediction, &instrument);

    let calculator = StopLossTakeProfit::from_config(&config.engine);
    let recommendation = calculator.recommend(
        &prediction,
        prediction.price,
        &instrument,
        &RiskSettings::default(),
    )?;
    println!();
    print_recommendation(&recommendation, &instrument);

    Ok(())
}

fn print_prediction(prediction: &Prediction, instrument: &InstrumentConfig) {
    println!("  Symbol: {}", prediction.symbol);
    println!("  Price: {}", instrument.format_price(prediction.price));
    println!("  Predicted: {}", instrument.format_price(prediction.predicted_price));
    println!("  Trend: {}", prediction.trend);
    println!("  Confidence: {:.1}%", prediction.confidence);
    println!("  Score: {:+.1}", prediction.score);
    println!("  RSI: {:.2}", prediction.rsi);
    println!("  Reasons:");
    for (i, reason) in Aggregator::generate_reasons(prediction).iter().enumerate() {
        println!("    {}. {} (weight: {:+.1})", i + 1, reason.description, reason.weight);
    }
}

fn print_recommendation(recommendation: &TradeRecommendation, instrument: &InstrumentConfig) {
    println!("  Action: {:?}", recommendation.action);
    if let Some(levels) = recommendation.levels {
        println!("  Entry: {}", instrument.format_price(levels.entry));
        println!("  Stop loss: {}", instrument.format_price(levels.stop_loss));
        println!("  Take profit: {}", instrument.format_price(levels.take_profit));
        println!("  Lot size: {:.2}", levels.lot_size);
        println!("  Risk: {:.2}  Potential profit: {:.2}", levels.risk_amount, levels.potential_profit);
    }
}
