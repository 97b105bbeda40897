use crate::core::types::Sample;

/// U.S. gross national debt in $ billions by year.
///
/// Source: <https://en.wikipedia.org/wiki/United_States_public_debt>.
#[must_use]
pub fn us_gross_national_debt() -> Vec<Sample> {
    vec![
        Sample::new(1910.0, 2.65),
        Sample::new(1920.0, 25.95),
        Sample::new(1928.0, 18.51),
        Sample::new(1930.0, 16.19),
        Sample::new(1940.0, 50.7),
        Sample::new(1950.0, 256.9),
        Sample::new(1960.0, 290.5),
        Sample::new(1970.0, 380.9),
        Sample::new(1980.0, 909.0),
        Sample::new(1990.0, 3_206.0),
        Sample::new(2000.0, 5_659.0),
        Sample::new(2001.0, 5_792.0),
        Sample::new(2002.0, 6_213.0),
        Sample::new(2003.0, 6_783.0),
        Sample::new(2004.0, 7_379.0),
        Sample::new(2005.0, 7_918.0),
        Sample::new(2006.0, 8_493.0),
        Sample::new(2007.0, 8_993.0),
        Sample::new(2008.0, 10_011.0),
        Sample::new(2009.0, 11_898.0),
        Sample::new(2010.0, 13_551.0),
        Sample::new(2011.0, 14_781.0),
        Sample::new(2012.0, 16_059.0),
        Sample::new(2013.0, 16_732.0),
        Sample::new(2014.0, 17_810.0),
        Sample::new(2015.0, 18_138.0),
    ]
}
