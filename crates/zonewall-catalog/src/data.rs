//! The catalog table.
//!
//! Curated set of major zones plus two synthetic entries: `UTC` and the
//! external system's fixed UTC−6 home zone. Alternate names follow the
//! external system's timezone naming.

use crate::TimezoneDescriptor;

/// All zones the picker offers.
pub static CATALOG: &[TimezoneDescriptor] = &[
    TimezoneDescriptor {
        id: "UTC",
        alternate_name: "UTC",
        label: "UTC",
        search_aliases: "coordinated universal time zulu",
    },
    TimezoneDescriptor {
        id: "Etc/GMT+6",
        alternate_name: "Central Standard Time (no DST)",
        label: "Salesforce / MCE",
        search_aliases: "salesforce marketing cloud mce system time",
    },
    TimezoneDescriptor {
        id: "Pacific/Midway",
        alternate_name: "Samoa Standard Time",
        label: "Midway",
        search_aliases: "samoa",
    },
    TimezoneDescriptor {
        id: "Pacific/Honolulu",
        alternate_name: "Hawaiian Standard Time",
        label: "Honolulu",
        search_aliases: "hawaii",
    },
    TimezoneDescriptor {
        id: "America/Anchorage",
        alternate_name: "Alaskan Standard Time",
        label: "Anchorage",
        search_aliases: "alaska",
    },
    TimezoneDescriptor {
        id: "America/Los_Angeles",
        alternate_name: "Pacific Standard Time",
        label: "Los Angeles",
        search_aliases: "san francisco seattle california",
    },
    TimezoneDescriptor {
        id: "America/Phoenix",
        alternate_name: "US Mountain Standard Time",
        label: "Phoenix",
        search_aliases: "arizona",
    },
    TimezoneDescriptor {
        id: "America/Denver",
        alternate_name: "Mountain Standard Time",
        label: "Denver",
        search_aliases: "colorado salt lake city",
    },
    TimezoneDescriptor {
        id: "America/Chicago",
        alternate_name: "Central Standard Time",
        label: "Chicago",
        search_aliases: "austin dallas houston texas",
    },
    TimezoneDescriptor {
        id: "America/Mexico_City",
        alternate_name: "Central Standard Time (Mexico)",
        label: "Mexico City",
        search_aliases: "mexico",
    },
    TimezoneDescriptor {
        id: "America/New_York",
        alternate_name: "Eastern Standard Time",
        label: "New York",
        search_aliases: "boston washington miami",
    },
    TimezoneDescriptor {
        id: "America/Bogota",
        alternate_name: "SA Pacific Standard Time",
        label: "Bogota",
        search_aliases: "colombia",
    },
    TimezoneDescriptor {
        id: "America/Lima",
        alternate_name: "SA Pacific Standard Time",
        label: "Lima",
        search_aliases: "peru",
    },
    TimezoneDescriptor {
        id: "America/Caracas",
        alternate_name: "Venezuela Standard Time",
        label: "Caracas",
        search_aliases: "venezuela",
    },
    TimezoneDescriptor {
        id: "America/Halifax",
        alternate_name: "Atlantic Standard Time",
        label: "Halifax",
        search_aliases: "nova scotia",
    },
    TimezoneDescriptor {
        id: "America/Santiago",
        alternate_name: "Pacific SA Standard Time",
        label: "Santiago",
        search_aliases: "chile",
    },
    TimezoneDescriptor {
        id: "America/St_Johns",
        alternate_name: "Newfoundland Standard Time",
        label: "St. John's",
        search_aliases: "newfoundland",
    },
    TimezoneDescriptor {
        id: "America/Sao_Paulo",
        alternate_name: "E. South America Standard Time",
        label: "Sao Paulo",
        search_aliases: "brazil brasilia rio de janeiro",
    },
    TimezoneDescriptor {
        id: "America/Argentina/Buenos_Aires",
        alternate_name: "Argentina Standard Time",
        label: "Buenos Aires",
        search_aliases: "argentina",
    },
    TimezoneDescriptor {
        id: "Atlantic/South_Georgia",
        alternate_name: "UTC-02",
        label: "South Georgia",
        search_aliases: "",
    },
    TimezoneDescriptor {
        id: "Atlantic/Azores",
        alternate_name: "Azores Standard Time",
        label: "Azores",
        search_aliases: "portugal",
    },
    TimezoneDescriptor {
        id: "Atlantic/Cape_Verde",
        alternate_name: "Cape Verde Standard Time",
        label: "Cape Verde",
        search_aliases: "",
    },
    TimezoneDescriptor {
        id: "Europe/London",
        alternate_name: "GMT Standard Time",
        label: "London",
        search_aliases: "uk united kingdom england",
    },
    TimezoneDescriptor {
        id: "Europe/Lisbon",
        alternate_name: "GMT Standard Time",
        label: "Lisbon",
        search_aliases: "portugal",
    },
    TimezoneDescriptor {
        id: "Europe/Paris",
        alternate_name: "Romance Standard Time",
        label: "Paris",
        search_aliases: "france",
    },
    TimezoneDescriptor {
        id: "Europe/Berlin",
        alternate_name: "W. Europe Standard Time",
        label: "Berlin",
        search_aliases: "germany frankfurt munich",
    },
    TimezoneDescriptor {
        id: "Europe/Madrid",
        alternate_name: "Romance Standard Time",
        label: "Madrid",
        search_aliases: "spain barcelona",
    },
    TimezoneDescriptor {
        id: "Europe/Rome",
        alternate_name: "W. Europe Standard Time",
        label: "Rome",
        search_aliases: "italy milan",
    },
    TimezoneDescriptor {
        id: "Europe/Amsterdam",
        alternate_name: "W. Europe Standard Time",
        label: "Amsterdam",
        search_aliases: "netherlands",
    },
    TimezoneDescriptor {
        id: "Europe/Warsaw",
        alternate_name: "Central European Standard Time",
        label: "Warsaw",
        search_aliases: "poland",
    },
    TimezoneDescriptor {
        id: "Europe/Athens",
        alternate_name: "GTB Standard Time",
        label: "Athens",
        search_aliases: "greece",
    },
    TimezoneDescriptor {
        id: "Europe/Helsinki",
        alternate_name: "FLE Standard Time",
        label: "Helsinki",
        search_aliases: "finland",
    },
    TimezoneDescriptor {
        id: "Europe/Istanbul",
        alternate_name: "Turkey Standard Time",
        label: "Istanbul",
        search_aliases: "turkey",
    },
    TimezoneDescriptor {
        id: "Europe/Moscow",
        alternate_name: "Russian Standard Time",
        label: "Moscow",
        search_aliases: "russia",
    },
    TimezoneDescriptor {
        id: "Africa/Casablanca",
        alternate_name: "Morocco Standard Time",
        label: "Casablanca",
        search_aliases: "morocco",
    },
    TimezoneDescriptor {
        id: "Africa/Lagos",
        alternate_name: "W. Central Africa Standard Time",
        label: "Lagos",
        search_aliases: "nigeria",
    },
    TimezoneDescriptor {
        id: "Africa/Cairo",
        alternate_name: "Egypt Standard Time",
        label: "Cairo",
        search_aliases: "egypt",
    },
    TimezoneDescriptor {
        id: "Africa/Johannesburg",
        alternate_name: "South Africa Standard Time",
        label: "Johannesburg",
        search_aliases: "south africa cape town",
    },
    TimezoneDescriptor {
        id: "Africa/Nairobi",
        alternate_name: "E. Africa Standard Time",
        label: "Nairobi",
        search_aliases: "kenya",
    },
    TimezoneDescriptor {
        id: "Asia/Dubai",
        alternate_name: "Arabian Standard Time",
        label: "Dubai",
        search_aliases: "uae abu dhabi",
    },
    TimezoneDescriptor {
        id: "Asia/Tehran",
        alternate_name: "Iran Standard Time",
        label: "Tehran",
        search_aliases: "iran",
    },
    TimezoneDescriptor {
        id: "Asia/Karachi",
        alternate_name: "Pakistan Standard Time",
        label: "Karachi",
        search_aliases: "pakistan",
    },
    TimezoneDescriptor {
        id: "Asia/Kolkata",
        alternate_name: "India Standard Time",
        label: "Kolkata",
        search_aliases: "delhi new delhi mumbai bangalore india",
    },
    TimezoneDescriptor {
        id: "Asia/Kathmandu",
        alternate_name: "Nepal Standard Time",
        label: "Kathmandu",
        search_aliases: "nepal",
    },
    TimezoneDescriptor {
        id: "Asia/Dhaka",
        alternate_name: "Bangladesh Standard Time",
        label: "Dhaka",
        search_aliases: "bangladesh",
    },
    TimezoneDescriptor {
        id: "Asia/Bangkok",
        alternate_name: "SE Asia Standard Time",
        label: "Bangkok",
        search_aliases: "thailand vietnam hanoi",
    },
    TimezoneDescriptor {
        id: "Asia/Singapore",
        alternate_name: "Singapore Standard Time",
        label: "Singapore",
        search_aliases: "kuala lumpur malaysia",
    },
    TimezoneDescriptor {
        id: "Asia/Shanghai",
        alternate_name: "China Standard Time",
        label: "Shanghai",
        search_aliases: "beijing china",
    },
    TimezoneDescriptor {
        id: "Asia/Tokyo",
        alternate_name: "Tokyo Standard Time",
        label: "Tokyo",
        search_aliases: "japan osaka",
    },
    TimezoneDescriptor {
        id: "Asia/Seoul",
        alternate_name: "Korea Standard Time",
        label: "Seoul",
        search_aliases: "korea",
    },
    TimezoneDescriptor {
        id: "Australia/Perth",
        alternate_name: "W. Australia Standard Time",
        label: "Perth",
        search_aliases: "western australia",
    },
    TimezoneDescriptor {
        id: "Australia/Adelaide",
        alternate_name: "Cen. Australia Standard Time",
        label: "Adelaide",
        search_aliases: "south australia",
    },
    TimezoneDescriptor {
        id: "Australia/Sydney",
        alternate_name: "AUS Eastern Standard Time",
        label: "Sydney",
        search_aliases: "melbourne canberra australia",
    },
    TimezoneDescriptor {
        id: "Pacific/Auckland",
        alternate_name: "New Zealand Standard Time",
        label: "Auckland",
        search_aliases: "new zealand wellington",
    },
];
