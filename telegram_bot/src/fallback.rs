use rand::seq::SliceRandom;
use rand::Rng;

pub const REAL_CLOCK_URL: &str = "https://www.clockfaceonline.co.uk/clocks/digital/";

const APOLOGY: &str = "My temporal consciousness seems to be malfunctioning... 🤖";

const ESTIMATION_METHODS: &[&str] = &[
    "Based on my analysis of current internet meme trends, which clearly indicate a temporal shift in the collective consciousness...",
    "By measuring the quantum fluctuations in my CPU's processing speed and converting them to temporal coordinates...",
    "After consulting the ancient art of chronological divination through random number generation...",
    "Using advanced calculations based on the number of cat videos posted in the last hour...",
    "By interpreting the cosmic background radiation as a temporal signal...",
];

/// One made-up time reading, e.g. `"By interpreting ... I estimate it's 7:05 PM!"`.
pub fn ridiculous_estimation<R: Rng>(rng: &mut R) -> String {
    let method = ESTIMATION_METHODS
        .choose(rng)
        .copied()
        .unwrap_or(ESTIMATION_METHODS[0]);
    let hour = rng.gen_range(1..=12);
    let minute = rng.gen_range(0..=59);
    let meridiem = if rng.gen_bool(0.5) { "AM" } else { "PM" };
    format!("{method} I estimate it's {hour}:{minute:02} {meridiem}!")
}

/// Reply used when the completion call fails. Always links to a real clock.
pub fn fallback_message<R: Rng>(rng: &mut R) -> String {
    format!(
        "{APOLOGY}\n\n\
         {}\n\n\
         😅 *sigh* You know what? I give up. Maybe you should just check the time yourself:\n\
         🔗 {REAL_CLOCK_URL}",
        ridiculous_estimation(rng)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn fallback_always_links_to_real_clock() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let message = fallback_message(&mut rng);
            assert!(message.contains(REAL_CLOCK_URL));
            assert!(message.starts_with(APOLOGY));
        }
    }

    #[test]
    fn estimation_is_a_plausible_twelve_hour_time() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let estimate = ridiculous_estimation(&mut rng);
            let (method, time) = estimate
                .split_once(" I estimate it's ")
                .expect("estimation sentence");
            assert!(ESTIMATION_METHODS.contains(&method));

            let time = time.strip_suffix('!').unwrap();
            let (clock, meridiem) = time.split_once(' ').unwrap();
            assert!(meridiem == "AM" || meridiem == "PM");
            let (hour, minute) = clock.split_once(':').unwrap();
            let hour: u32 = hour.parse().unwrap();
            assert!((1..=12).contains(&hour));
            assert_eq!(minute.len(), 2);
            assert!(minute.parse::<u32>().unwrap() < 60);
        }
    }

    #[test]
    fn same_seed_gives_same_message() {
        let a = fallback_message(&mut StdRng::seed_from_u64(1));
        let b = fallback_message(&mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }
}
