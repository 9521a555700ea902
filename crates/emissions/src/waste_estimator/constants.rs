//! Constants for the monthly food-waste estimate.

/// Students enrolled in the dining plan.
pub const ENROLLED_STUDENTS: f64 = 1708.0;

/// Meal units eaten per student per day.
pub const MEALS_PER_STUDENT_PER_DAY: f64 = 1.2;

/// Meals served per week.
pub const MEALS_PER_WEEK: f64 = 14.0;

/// Weeks counted in one month.
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// Calories in one meal.
pub const CALORIES_PER_MEAL: f64 = 2000.0;

/// Watt hours per calorie.
pub const WATT_HOURS_PER_CALORIE: f64 = 0.001162;

/// Pounds in one short ton. Meal units are counted in pounds.
pub const POUNDS_PER_TON: f64 = 2000.0;
