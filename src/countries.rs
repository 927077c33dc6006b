pub mod country_table {
    /// A country as known by the remote endpoint
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Country {
        /// Display name, also used as the cache file stem
        pub name: &'static str,
        /// Opaque numeric code passed in the request URL
        pub code: &'static str,
    }

    impl Country {
        pub const fn new(name: &'static str, code: &'static str) -> Self {
            Self { name, code }
        }

        pub fn filename(&self) -> String {
            format!("{}.json", self.name)
        }
    }

    /// Every country fetched, in download order
    pub const COUNTRIES: &[Country] = &[
        Country::new("Albania", "53"),
        Country::new("Andorra", "41"),
        Country::new("Argentina", "49"),
        Country::new("Armenia", "94"),
        Country::new("Australia", "29"),
        Country::new("Austria", "4"),
        Country::new("Belgium", "8"),
        Country::new("Bolivia", "74"),
        Country::new("Bosnia and Herzegovina", "56"),
        Country::new("Botswana", "120"),
        Country::new("Brazil", "50"),
        Country::new("Bulgaria", "47"),
        Country::new("Canada", "24"),
        Country::new("Chile", "48"),
        Country::new("China", "36"),
        Country::new("Colombia", "52"),
        Country::new("Costa Rica", "67"),
        Country::new("Croatia", "31"),
        Country::new("Cyprus", "34"),
        Country::new("Czech Republic", "32"),
        Country::new("Denmark", "18"),
        Country::new("Egypt", "116"),
        Country::new("Estonia", "30"),
        Country::new("Finland", "25"),
        Country::new("France", "6"),
        Country::new("Georgia", "95"),
        Country::new("Germany", "7"),
        Country::new("Greece", "26"),
        Country::new("Guatemala", "63"),
        Country::new("Hungary", "33"),
        Country::new("Iceland", "35"),
        Country::new("India", "44"),
        Country::new("Indonesia", "59"),
        Country::new("Iran", "102"),
        Country::new("Ireland", "22"),
        Country::new("Israel", "57"),
        Country::new("Italy", "12"),
        Country::new("Japan", "109"),
        Country::new("Jordan", "86"),
        Country::new("Kazakhstan", "97"),
        Country::new("Kuwait", "39"),
        Country::new("Kyrgyzstan", "93"),
        Country::new("Laos", "81"),
        Country::new("Latvia", "60"),
        Country::new("Lebanon", "85"),
        Country::new("Lesotho", "139"),
        Country::new("Libya", "114"),
        Country::new("Lithuania", "61"),
        Country::new("Luxembourg", "17"),
        Country::new("Malaysia", "78"),
        Country::new("Mauritius", "164"),
        Country::new("Mexico", "37"),
        Country::new("Moldova", "111"),
        Country::new("Montenegro", "54"),
        Country::new("Morocco", "38"),
        Country::new("Mozambique", "145"),
        Country::new("Namibia", "146"),
        Country::new("Nepal", "107"),
        Country::new("Netherlands", "9"),
        Country::new("New Zealand", "28"),
        Country::new("North Macedonia", "55"),
        Country::new("Norway", "13"),
        Country::new("Oman", "89"),
        Country::new("Pakistan", "43"),
        Country::new("Peru", "62"),
        Country::new("Philippines", "84"),
        Country::new("Poland", "51"),
        Country::new("Portugal", "15"),
        Country::new("Puerto Rico", "163"),
        Country::new("Romania", "46"),
        Country::new("Russia", "2"),
        Country::new("Saudi Arabia", "87"),
        Country::new("Serbia", "161"),
        Country::new("Slovakia", "27"),
        Country::new("Slovenia", "45"),
        Country::new("South Africa", "42"),
        Country::new("Spain", "11"),
        Country::new("Sweden", "19"),
        Country::new("Switzerland", "16"),
        Country::new("Syria", "100"),
        Country::new("Tajikistan", "92"),
        Country::new("Thailand", "80"),
        Country::new("Tunisia", "117"),
        Country::new("Turkey", "21"),
        Country::new("Ukraine", "112"),
        Country::new("United Arab Emirates", "90"),
        Country::new("United Kingdom", "1"),
        Country::new("United States", "23"),
        Country::new("Uruguay", "76"),
        Country::new("Uzbekistan", "104"),
        Country::new("Vietnam", "82"),
        Country::new("Zimbabwe", "159"),
    ];

}
