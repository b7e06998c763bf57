//! Sample documents shared by the cross-layer tests.

pub const VCARD40_FULL: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN:Dr. Jane Q. Doe\\, Jr.\r\n\
N:Doe;Jane;Q.;Dr.;Jr.\r\n\
NICKNAME:JD,Janie\r\n\
BDAY:19960415\r\n\
GENDER:F\r\n\
ADR;TYPE=home;LABEL=\"123 Main St\\nAnytown\":;;123 Main St;Anytown;CA;91921;USA\r\n\
TEL;TYPE=voice,home:tel:+1-555-555-0100\r\n\
EMAIL;TYPE=work:jane@example.com\r\n\
LANG;PREF=1:en\r\n\
GEO:geo:37.386013,-122.082932\r\n\
TITLE:Research Scientist\r\n\
ORG:Example Corp;Research;Devices\r\n\
CATEGORIES:science,chemistry\r\n\
NOTE:Likes commas\\, semicolons\\; and newlines\\nvery much.\r\n\
UID:urn:uuid:4fbe8971-0bc3-424c-9c26-36c3e1eff6b1\r\n\
URL:https://example.com/~jane\r\n\
item1.X-SOCIALPROFILE;TYPE=twitter:https://twitter.com/jdoe\r\n\
END:VCARD\r\n";

pub const VCARD40_ALTID: &str = "\
BEGIN:VCARD\r\n\
VERSION:4.0\r\n\
FN;ALTID=1;LANGUAGE=en:Jane Doe\r\n\
FN;ALTID=1;LANGUAGE=ja:ジェーン・ドウ\r\n\
N:Doe;Jane;;;\r\n\
END:VCARD\r\n";

pub const VCARD30_SIMPLE: &str = "\
BEGIN:VCARD\r\n\
VERSION:3.0\r\n\
FN:John Smith\r\n\
N:Smith;John;;;\r\n\
TZ:-0500\r\n\
GEO:37.386013;-122.082932\r\n\
TEL;TYPE=home,voice:+1-555-555-0101\r\n\
PHOTO;ENCODING=b;TYPE=JPEG:SGVsbG8gV29ybGQ=\r\n\
END:VCARD\r\n";

pub const VCARD21_LEGACY: &str = "\
BEGIN:VCARD\r\n\
VERSION:2.1\r\n\
N:Doe;John;;;\r\n\
FN:John Doe\r\n\
ADR;DOM;HOME:;;123 Main Street;Any Town;CA;91921;\r\n\
TEL;HOME;VOICE:+1-555-555-0102\r\n\
LABEL;HOME;ENCODING=QUOTED-PRINTABLE:123 Main Street=0AAny Town\r\n\
NOTE;ENCODING=QUOTED-PRINTABLE:caf=C3=A9 visits =\r\n\
on weekends\r\n\
END:VCARD\r\n";

pub const VEVENT_FULL: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Kagami//Kagami 0.1//EN\r\n\
CALSCALE:GREGORIAN\r\n\
BEGIN:VEVENT\r\n\
UID:19970901T130000Z-123401@example.com\r\n\
DTSTAMP:19970901T130000Z\r\n\
DTSTART;TZID=America/New_York:19970903T163000\r\n\
DTEND;TZID=America/New_York:19970903T190000\r\n\
SUMMARY:Annual Employee Review\r\n\
DESCRIPTION:Project xyz review\\nagenda attached\r\n\
LOCATION:Conference Room A\r\n\
CLASS:PRIVATE\r\n\
CATEGORIES:BUSINESS,HUMAN RESOURCES\r\n\
PRIORITY:2\r\n\
SEQUENCE:3\r\n\
STATUS:CONFIRMED\r\n\
RRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR;COUNT=10\r\n\
EXDATE:19970910T163000Z,19970917T163000Z\r\n\
ORGANIZER;CN=Boss:mailto:boss@example.com\r\n\
ATTENDEE;ROLE=REQ-PARTICIPANT;PARTSTAT=ACCEPTED;RSVP=TRUE;CN=\"Doe, Jane\":mailto:jane@example.com\r\n\
GEO:40.442;-79.945\r\n\
BEGIN:VALARM\r\n\
ACTION:DISPLAY\r\n\
TRIGGER:-PT15M\r\n\
DESCRIPTION:Reminder\r\n\
END:VALARM\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

pub const VFREEBUSY_PERIODS: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Kagami//Kagami 0.1//EN\r\n\
BEGIN:VFREEBUSY\r\n\
UID:fb1@example.com\r\n\
DTSTAMP:19970901T083000Z\r\n\
DTSTART:19970101T000000Z\r\n\
DTEND:19970201T000000Z\r\n\
FREEBUSY:19970101T180000Z/19970102T070000Z,19970103T090000Z/PT5H30M\r\n\
END:VFREEBUSY\r\n\
END:VCALENDAR\r\n";

pub const VTIMEZONE_OFFSETS: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Kagami//Kagami 0.1//EN\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:America/New_York\r\n\
BEGIN:STANDARD\r\n\
DTSTART:19971026T020000\r\n\
TZOFFSETFROM:-0400\r\n\
TZOFFSETTO:-0500\r\n\
TZNAME:EST\r\n\
END:STANDARD\r\n\
BEGIN:DAYLIGHT\r\n\
DTSTART:19970406T020000\r\n\
TZOFFSETFROM:-0500\r\n\
TZOFFSETTO:-0400\r\n\
TZNAME:EDT\r\n\
END:DAYLIGHT\r\n\
END:VTIMEZONE\r\n\
BEGIN:VEVENT\r\n\
UID:tz1@example.com\r\n\
DTSTAMP:19970901T130000Z\r\n\
DTSTART;TZID=America/New_York:19970903T163000\r\n\
SUMMARY:Zoned event\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

pub const VCALENDAR10_LEGACY: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:1.0\r\n\
TZ:-0800\r\n\
BEGIN:VEVENT\r\n\
UID:legacy-1\r\n\
DCREATED:19960401T073000Z\r\n\
DTSTART:19960402T010000Z\r\n\
DTEND:19960402T020000Z\r\n\
SUMMARY:Legacy planning meeting\r\n\
DURATION:P1Y2M3DT4H5M6S\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

pub const VTODO_SIMPLE: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Kagami//Kagami 0.1//EN\r\n\
BEGIN:VTODO\r\n\
UID:todo-1@example.com\r\n\
DTSTAMP:20260123T120000Z\r\n\
DUE;VALUE=DATE:20260301\r\n\
SUMMARY:File taxes\r\n\
PERCENT-COMPLETE:25\r\n\
END:VTODO\r\n\
END:VCALENDAR\r\n";
