mod tests {
    use approx::assert_relative_eq;

    use crate::time::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_YEAR, Time};

    #[test]
    fn test_time_conversions() {
        // Test years to seconds
        let time_years = Time::from_years(1.0);
        assert_relative_eq!(time_years.to_seconds(), SECONDS_PER_YEAR);

        // Test seconds to years
        let time_seconds = Time::from_seconds(SECONDS_PER_YEAR);
        assert_relative_eq!(time_seconds.to_years(), 1.0);

        // Test days
        let time_days = Time::from_days(30.0);
        assert_relative_eq!(time_days.to_seconds(), 30.0 * SECONDS_PER_DAY);
        assert_relative_eq!(time_days.to_days(), 30.0);

        // Test hours and minutes
        let time_hours = Time::from_hours(240.0);
        assert_relative_eq!(time_hours.to_seconds(), 240.0 * SECONDS_PER_HOUR);
        assert_relative_eq!(time_hours.to_days(), 10.0);
        assert_relative_eq!(Time::from_minutes(90.0).to_hours(), 1.5);
        assert_relative_eq!(Time::from_hours(2.0).to_minutes(), 120.0);

        // Julian year is exactly 365.25 days
        assert_relative_eq!(Time::from_years(1.0).to_days(), 365.25);
    }

    #[test]
    fn test_time_arithmetic_operations() {
        let a = Time::from_days(10.0);
        let b = Time::from_days(5.0);

        assert_relative_eq!((a + b).to_days(), 15.0);
        assert_relative_eq!((a - b).to_days(), 5.0);
        assert_relative_eq!((a * 3.0).to_days(), 30.0);
        assert_relative_eq!((a / 4.0).to_days(), 2.5);
        assert_relative_eq!(a / b, 2.0);
        assert_eq!(Time::zero().to_seconds(), 0.0);
    }
}
