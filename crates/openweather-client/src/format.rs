//! Renders a [`WeatherRecord`] into the Russian Markdown report sent to users.

use chrono::DateTime;

use crate::model::WeatherRecord;

const TIP_RAIN: &str = " ☔ Льёт как из ведра! Зонт бери или танцуй под ливнем, как в клипе! 💃";
const TIP_SNOW: &str = " ❄️ Снежок идёт! Лепи снеговика или греми чайник для какао! ☕⛄";
const TIP_STORM: &str = " ⛈️ Гром гремит! Сиди дома, смотри кино, молния — не твой бро! 😬";
const TIP_HEAT: &str = " 🔥 Пекло! Хватай мороженое и ныряй в тень, бро! 🍦🌴";
const TIP_WARM: &str = " ☀️ Жарковато! Коктейль в парке или кондей на полную? Выбирай wisely! 🍹";
const TIP_DEEP_FROST: &str = " 🥶 Ледяной апокалипсис! Укутайся, как пингвин, и пей горячий чай! 🧣☕";
const TIP_FROST: &str = " ❄️ Холодрыга! Шарф, шапка и тёплые носки — твой must-have! 🧦";
const TIP_HUMID: &str = " 💧 Влажность зашкаливает! Крем от сырости или просто chill у воды? 🌊";
const TIP_STORM_WIND: &str = " 🌪️ Ветрище штормовой! Держи шляпу и не улети, как Карлсон! 🚁";
const TIP_STRONG_WIND: &str = " 💨 Ветер крепкий! Завяжи шнурки потуже, а то унесёт к приключениям! 😎";
const TIP_CLEAR: &str = " 🌞 Солнце сияет! Хватай очки и гуляй, пока погода шепчет! 😎🚶‍♂️";
const TIP_DEFAULT: &str = " 😎 Погода — кайф! Выходи на улицу, лови вайб и наслаждайся! 🌳🎉";

/// Formats the full weather report: header with local observation time,
/// condition line, temperatures, humidity, wind, and exactly one contextual
/// tip. Deterministic for identical records.
pub fn format_report(record: &WeatherRecord) -> String {
    let icon = icon_glyph(&record.icon);
    let city = title_case_ru(&record.city);
    let condition = title_case_ru(&record.description);
    let local_time = local_hh_mm(record.observed_at, record.timezone_offset_secs);
    let temp = round_c(record.temp_c);
    let feels_like = round_c(record.feels_like_c);

    let mut report = format!(
        "🌍 *{city}* сейчас ({local_time}):\n\
         {condition} {icon} {icon}\n\
         Температура: {temp}°C (ощущается как {feels_like}°C)\n\
         Влажность: {humidity}%\n\
         Ветер: {wind:.1} м/с",
        humidity = record.humidity,
        wind = record.wind_speed_mps,
    );
    report.push_str(pick_tip(
        &record.description,
        temp,
        record.humidity,
        record.wind_speed_mps,
    ));
    report
}

/// Rounds half away from zero for both signs: 24.5 → 25, −0.5 → −1.
fn round_c(temp: f64) -> i64 {
    temp.round() as i64
}

/// Resolves the condition glyph from the provider icon code. Unrecognized
/// codes fall back to the generic thermometer, never an empty string.
fn icon_glyph(code: &str) -> &'static str {
    match code {
        "01d" => "☀️",
        "01n" => "🌙",
        "02d" | "02n" => "⛅",
        "03d" | "03n" | "04d" | "04n" => "☁️",
        "09d" | "09n" => "🌧️",
        "10d" | "10n" => "🌦️",
        "11d" | "11n" => "⛈️",
        "13d" | "13n" => "🌨️",
        "50d" | "50n" => "🌫️",
        _ => "🌡️",
    }
}

/// Local wall-clock time of the observation, rendered as HH:MM.
fn local_hh_mm(observed_at: i64, offset_secs: i64) -> String {
    DateTime::from_timestamp(observed_at + offset_secs, 0)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// Title-cases each word under Russian casing rules: the first letter of every
/// word (whitespace- or hyphen-delimited) is uppercased, the rest lowered.
fn title_case_ru(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
                at_word_start = false;
            } else {
                out.extend(ch.to_lowercase());
            }
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Picks the single contextual tip. The rules form an ordered list evaluated
/// first to last, and the order is a contract: when several conditions hold
/// at once (hot and humid, rain and hot), the earliest rule wins. Keyword
/// rules match the lowercased description; temperature rules use the rounded
/// value shown in the report.
fn pick_tip(description: &str, temp: i64, humidity: u8, wind_speed: f64) -> &'static str {
    let desc = description.to_lowercase();
    let rules = [
        (desc.contains("дождь"), TIP_RAIN),
        (desc.contains("снег"), TIP_SNOW),
        (desc.contains("гроз"), TIP_STORM),
        (temp > 30, TIP_HEAT),
        (temp > 25, TIP_WARM),
        (temp < -10, TIP_DEEP_FROST),
        (temp < 0, TIP_FROST),
        (humidity > 80, TIP_HUMID),
        (wind_speed > 15.0, TIP_STORM_WIND),
        (wind_speed > 10.0, TIP_STRONG_WIND),
        (desc.contains("ясно"), TIP_CLEAR),
    ];
    rules
        .iter()
        .find(|(matched, _)| *matched)
        .map(|(_, tip)| *tip)
        .unwrap_or(TIP_DEFAULT)
}
