//! Artifact text templates.
//!
//! One function per (variant, artifact) pair. The three artifacts of a
//! variant always embed the same zone token and the same deltas; the
//! consistency is covered by the crate tests.

use crate::ConversionPlan;

pub fn local_query(token: &str) -> String {
    format!(
        "SELECT\n\
         \x20   s.SubscriberKey,\n\
         \x20   SystemDateToLocalDate(s.EventDate) AS EventDate_{token}\n\
         FROM [Your_Data_Extension] s\n\
         /* {token} is the account's local zone: the platform converts natively */"
    )
}

pub fn local_ampscript(token: &str) -> String {
    format!(
        "%%[\n\
         VAR @sourceDate, @localDate_{token}\n\
         SET @sourceDate = NOW() /* system time, UTC-6 */\n\
         SET @localDate_{token} = SystemDateToLocalDate(@sourceDate)\n\
         ]%%"
    )
}

pub fn local_ssjs(token: &str) -> String {
    format!(
        "<script runat=\"server\">\n\
         Platform.Load(\"Core\", \"1\");\n\
         var sourceDate = Platform.Function.SystemDateToLocalDate(Now());\n\
         // {token} is the account's local zone: the platform converts natively\n\
         var localDate_{token} = sourceDate;\n\
         </script>"
    )
}

pub fn fixed_utc_query(token: &str) -> String {
    format!(
        "SELECT\n\
         \x20   s.SubscriberKey,\n\
         \x20   DATEADD(HOUR, 6, s.EventDate) AS EventDate_{token}\n\
         FROM [Your_Data_Extension] s\n\
         /* UTC = system time (UTC-6) + 6h, constant all year */"
    )
}

pub fn fixed_utc_ampscript(token: &str) -> String {
    format!(
        "%%[\n\
         VAR @sourceDate, @localDate_{token}\n\
         SET @sourceDate = NOW() /* system time, UTC-6 */\n\
         SET @localDate_{token} = DateAdd(@sourceDate, 6, \"H\")\n\
         /* UTC = system time (UTC-6) + 6h, constant all year */\n\
         ]%%"
    )
}

pub fn fixed_utc_ssjs(token: &str) -> String {
    format!(
        "<script runat=\"server\">\n\
         Platform.Load(\"Core\", \"1\");\n\
         var sourceDate = new Date(); // system time, UTC-6\n\
         // UTC = system time (UTC-6) + 6h, constant all year\n\
         var localDate_{token} = new Date(sourceDate.getTime() + 6 * 3600000);\n\
         </script>"
    )
}

pub fn general_query(plan: &ConversionPlan) -> String {
    let token = &plan.token;
    let summer = plan.summer_delta_hours;
    let winter = plan.winter_delta_hours;
    format!(
        "SELECT\n\
         \x20   s.SubscriberKey,\n\
         \x20   CASE\n\
         \x20       WHEN s.EventDate >= '{start}' AND s.EventDate < '{end}'\n\
         \x20           THEN DATEADD(HOUR, {summer}, s.EventDate) /* summer */\n\
         \x20       ELSE DATEADD(HOUR, {winter}, s.EventDate) /* winter */\n\
         \x20   END AS EventDate_{token}\n\
         FROM [Your_Data_Extension] s\n\
         /* DST window is approximate - verify boundaries for {year} */",
        start = plan.dst_start,
        end = plan.dst_end,
        year = plan.year,
    )
}

pub fn general_ampscript(plan: &ConversionPlan) -> String {
    let token = &plan.token;
    let summer = plan.summer_delta_hours;
    let winter = plan.winter_delta_hours;
    format!(
        "%%[\n\
         VAR @sourceDate, @localDate_{token}\n\
         SET @sourceDate = NOW() /* system time, UTC-6 */\n\
         IF @sourceDate >= DateParse(\"{start}\") AND @sourceDate < DateParse(\"{end}\") THEN\n\
         \x20   SET @localDate_{token} = DateAdd(@sourceDate, {summer}, \"H\") /* summer */\n\
         ELSE\n\
         \x20   SET @localDate_{token} = DateAdd(@sourceDate, {winter}, \"H\") /* winter */\n\
         ENDIF\n\
         /* DST window is approximate - verify boundaries for {year} */\n\
         ]%%",
        start = plan.dst_start,
        end = plan.dst_end,
        year = plan.year,
    )
}

pub fn general_ssjs(plan: &ConversionPlan) -> String {
    let token = &plan.token;
    let summer = plan.summer_delta_hours;
    let winter = plan.winter_delta_hours;
    format!(
        "<script runat=\"server\">\n\
         Platform.Load(\"Core\", \"1\");\n\
         var sourceDate = new Date(); // system time, UTC-6\n\
         var summerStart = new Date(\"{start}\");\n\
         var winterStart = new Date(\"{end}\");\n\
         var localDate_{token};\n\
         if (sourceDate >= summerStart && sourceDate < winterStart) {{\n\
         \x20   localDate_{token} = new Date(sourceDate.getTime() + {summer} * 3600000); // summer\n\
         }} else {{\n\
         \x20   localDate_{token} = new Date(sourceDate.getTime() + {winter} * 3600000); // winter\n\
         }}\n\
         // DST window is approximate - verify boundaries for {year}\n\
         </script>",
        start = plan.dst_start,
        end = plan.dst_end,
        year = plan.year,
    )
}
