// Boiler reading domain model

/// One normalized reading from the plant CSV. Timestamps are naive local
/// wall-clock instants as epoch milliseconds; any channel other than power
/// may be NaN and is treated as missing downstream.
#[derive(Debug, Clone, Copy)]
pub struct Reading {
    pub timestamp_ms: i64,
    pub steam: f64,
    pub power: f64,
    pub temp_comb: f64,
    pub temp_flue: f64,
    pub idf: f64,
    pub rgf: f64,
    pub soot: bool,
}

impl Reading {
    pub fn new(
        timestamp_ms: i64,
        steam: f64,
        power: f64,
        temp_comb: f64,
        temp_flue: f64,
        idf: f64,
        rgf: f64,
        soot: bool,
    ) -> Self {
        Self {
            timestamp_ms,
            steam,
            power,
            temp_comb,
            temp_flue,
            idf,
            rgf,
            soot,
        }
    }
}

/// The numeric channels a reading carries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Steam,
    Power,
    TempComb,
    TempFlue,
    Idf,
    Rgf,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::Steam,
        Channel::Power,
        Channel::TempComb,
        Channel::TempFlue,
        Channel::Idf,
        Channel::Rgf,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Channel::Steam => "steam",
            Channel::Power => "power",
            Channel::TempComb => "temp_comb",
            Channel::TempFlue => "temp_flue",
            Channel::Idf => "idf",
            Channel::Rgf => "rgf",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Steam => "Steam Flow",
            Channel::Power => "Export Power",
            Channel::TempComb => "Combustion Temp",
            Channel::TempFlue => "Flue Gas Temp",
            Channel::Idf => "IDF Running",
            Channel::Rgf => "RGF Running",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Channel::Steam => "t/h",
            Channel::Power => "MW",
            Channel::TempComb | Channel::TempFlue => "°C",
            Channel::Idf | Channel::Rgf => "%",
        }
    }

    pub fn value(&self, reading: &Reading) -> f64 {
        match self {
            Channel::Steam => reading.steam,
            Channel::Power => reading.power,
            Channel::TempComb => reading.temp_comb,
            Channel::TempFlue => reading.temp_flue,
            Channel::Idf => reading.idf,
            Channel::Rgf => reading.rgf,
        }
    }
}
