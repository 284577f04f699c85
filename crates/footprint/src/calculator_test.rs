#[cfg(test)]
mod tests {
    use crate::calculator::*;
    use common::models::{Category, TransportType};
    use common::Error;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_car_gasoline_100_km() {
        let mut calc = Calculator::new();
        let emissions = calc.calculate_transportation("car_gasoline_km", 100.0).unwrap();

        assert_eq!(emissions, 0.192 * 100.0);
        assert!(approx(emissions, 19.2));
        assert!(approx(calc.get_breakdown().transportation, 19.2));
    }

    #[test]
    fn test_bus_50_km() {
        let mut calc = Calculator::new();
        let emissions = calc.calculate_transportation("bus_km", 50.0).unwrap();
        assert!(approx(emissions, 4.45));
    }

    #[test]
    fn test_bike_is_zero_emission() {
        let mut calc = Calculator::new();
        assert_eq!(calc.calculate_transportation("bike_km", 10.0).unwrap(), 0.0);
        assert_eq!(calc.calculate_transportation("walk_km", 3.0).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_distance_is_zero_without_error() {
        let mut calc = Calculator::new();
        assert_eq!(calc.calculate_transportation("plane_long_km", 0.0).unwrap(), 0.0);
        assert_eq!(calc.get_total_emissions(), 0.0);
    }

    #[test]
    fn test_electricity_100_kwh() {
        let mut calc = Calculator::new();
        let emissions = calc.calculate_energy("electricity_kwh", 100.0).unwrap();
        assert!(approx(emissions, 23.3));
        assert!(approx(calc.get_breakdown().energy, 23.3));
    }

    #[test]
    fn test_heating_oil_per_liter() {
        let mut calc = Calculator::new();
        let emissions = calc.calculate_energy("heating_oil_liter", 10.0).unwrap();
        assert!(approx(emissions, 25.2));
    }

    #[test]
    fn test_vegan_week() {
        let mut calc = Calculator::new();
        let emissions = calc.calculate_food("vegan_day", 7).unwrap();
        assert_eq!(emissions, 2.89 * 7.0);
        assert!(approx(emissions, 20.23));
    }

    #[test]
    fn test_meat_heavy_week() {
        let mut calc = Calculator::new();
        let emissions = calc.calculate_food("meat_heavy_day", 7).unwrap();
        assert!(approx(emissions, 50.33));
    }

    #[test]
    fn test_bare_alias_matches_suffixed_key() {
        let mut calc = Calculator::new();
        let a = calc.calculate_transportation("car_gasoline", 100.0).unwrap();
        let b = calc.calculate_transportation("car_gasoline_km", 100.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_total_across_categories() {
        let mut calc = Calculator::new();
        calc.calculate_transportation("car_gasoline_km", 50.0).unwrap();
        calc.calculate_energy("electricity_kwh", 50.0).unwrap();
        calc.calculate_food("vegetarian_day", 7).unwrap();

        let expected = (0.192 * 50.0) + (0.233 * 50.0) + (3.81 * 7.0);
        assert!(approx(calc.get_total_emissions(), expected));
    }

    #[test]
    fn test_breakdown_accumulates_additively() {
        let mut calc = Calculator::new();
        let first = calc.calculate_transportation("train_km", 120.0).unwrap();
        let second = calc.calculate_transportation("train_km", 80.0).unwrap();

        assert_eq!(calc.get_breakdown().transportation, first + second);
        assert_eq!(calc.get_breakdown().energy, 0.0);
        assert_eq!(calc.get_breakdown().food, 0.0);
    }

    #[test]
    fn test_breakdown_sum_equals_total() {
        let mut calc = Calculator::new();
        calc.calculate_transportation("bus_km", 100.0).unwrap();
        calc.calculate_energy("natural_gas_kwh", 33.3).unwrap();
        calc.calculate_food("pescatarian_day", 3).unwrap();
        calc.calculate_transportation("plane_short_km", 700.0).unwrap();

        let b = calc.get_breakdown();
        assert_eq!(b.transportation + b.energy + b.food, calc.get_total_emissions());
    }

    #[test]
    fn test_breakdown_is_a_copy() {
        let mut calc = Calculator::new();
        calc.calculate_energy("electricity_kwh", 10.0).unwrap();

        let mut copy = calc.get_breakdown();
        copy.energy = 1_000.0;

        assert!(approx(calc.get_breakdown().energy, 2.33));
    }

    #[test]
    fn test_reset() {
        let mut calc = Calculator::new();
        calc.calculate_transportation("car_gasoline_km", 100.0).unwrap();
        calc.calculate_food("meat_low_day", 2).unwrap();
        calc.reset();

        assert_eq!(calc.get_total_emissions(), 0.0);
        let b = calc.get_breakdown();
        assert_eq!(b.transportation, 0.0);
        assert_eq!(b.energy, 0.0);
        assert_eq!(b.food, 0.0);
    }

    #[test]
    fn test_invalid_transport_type() {
        let mut calc = Calculator::new();
        let err = calc.calculate_transportation("invalid_type", 100.0).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownActivityType {
                category: Category::Transportation,
                ..
            }
        ));
        assert_eq!(calc.get_total_emissions(), 0.0);
    }

    #[test]
    fn test_invalid_energy_type() {
        let mut calc = Calculator::new();
        assert!(matches!(
            calc.calculate_energy("invalid_type", 100.0),
            Err(Error::UnknownActivityType {
                category: Category::Energy,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_diet_type() {
        let mut calc = Calculator::new();
        assert!(matches!(
            calc.calculate_food("invalid_type", 7),
            Err(Error::UnknownActivityType {
                category: Category::Food,
                ..
            })
        ));
    }

    #[test]
    fn test_negative_distance_rejected() {
        let mut calc = Calculator::new();
        assert!(matches!(
            calc.calculate_transportation("car_diesel_km", -5.0),
            Err(Error::InvalidQuantity(_))
        ));
        assert_eq!(calc.get_total_emissions(), 0.0);
    }

    #[test]
    fn test_nan_consumption_rejected() {
        let mut calc = Calculator::new();
        assert!(calc.calculate_energy("electricity_kwh", f64::NAN).is_err());
        assert!(calc.add_transportation(TransportType::Bus, f64::INFINITY).is_err());
    }

    #[test]
    fn test_factor_table_is_complete() {
        let factors = emission_factors();
        assert_eq!(factors.len(), 9 + 3 + 6);

        let car = factors
            .iter()
            .find(|f| f.activity == "car_gasoline_km")
            .unwrap();
        assert_eq!(car.category, Category::Transportation);
        assert_eq!(car.factor, 0.192);

        let oil = factors
            .iter()
            .find(|f| f.activity == "heating_oil_liter")
            .unwrap();
        assert_eq!(oil.factor, 2.52);

        assert!(factors.iter().all(|f| f.factor >= 0.0));
    }
}
